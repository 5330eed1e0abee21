//! End-to-end conversations through the session controller
//!
//! Each test submits a visitor message and checks the assistant reply that
//! lands in the transcript after the thinking delay.

use std::sync::Arc;
use std::time::Duration;

use construction_assistant_agent::{
    ChatSession, QueryAnalyzer, SessionConfig, SessionEvent, SessionState, FALLBACK_RULE,
};
use construction_assistant_config::{KnowledgeBase, ReplyOrdering};
use construction_assistant_core::Role;
use construction_assistant_text_processing::MessageFormatter;

fn new_session() -> ChatSession {
    let analyzer = Arc::new(QueryAnalyzer::new(KnowledgeBase::builtin()));
    ChatSession::new(analyzer, SessionConfig::default())
}

async fn ask(session: &ChatSession, text: &str) -> (String, &'static str) {
    let reply = session
        .submit(text)
        .expect("message accepted")
        .wait()
        .await
        .expect("reply delivered");
    (reply.message.content, reply.rule)
}

#[tokio::test(start_paused = true)]
async fn test_cost_by_area() {
    let session = new_session();
    let (content, rule) = ask(&session, "Calculate cost for 1500 sq.ft").await;

    assert_eq!(rule, "area_cost");
    assert!(content.starts_with("**📊 Cost Estimate for 1500 sq.ft:**"));
    assert!(content.contains("**Standard Package**: ₹31,50,000"));
    assert!(content.contains("**Premium Package**: ₹34,50,000"));
    assert!(content.contains("**Luxury Package**: ₹37,50,000"));
}

#[tokio::test(start_paused = true)]
async fn test_cost_by_area_with_comma_grouping() {
    let session = new_session();
    let (content, rule) = ask(&session, "what is the cost for 1,200 square feet?").await;

    assert_eq!(rule, "area_cost");
    assert!(content.contains("Cost Estimate for 1200 sq.ft"));
}

#[tokio::test(start_paused = true)]
async fn test_bhk_cost() {
    let session = new_session();
    let (content, rule) = ask(&session, "Cost for 3BHK").await;

    assert_eq!(rule, "bhk_cost");
    assert!(content.contains("3BHK Cost Estimate (1500 sq.ft)"));
    assert!(content.contains("₹31,50,000"));
    assert!(content.contains("Typical range: ₹27,59,400 - ₹41,06,250"));
}

#[tokio::test(start_paused = true)]
async fn test_plot_details() {
    let session = new_session();
    let (content, rule) = ask(&session, "Cost for 30x40 plot").await;

    assert_eq!(rule, "plot");
    assert!(content.contains("30x40 Plot Details"));
    assert!(content.contains("~720 sq.ft (60% coverage)"));
    assert!(content.contains("• Standard Package: ₹15,12,000"));
}

#[tokio::test(start_paused = true)]
async fn test_greeting() {
    let session = new_session();
    let (content, rule) = ask(&session, "hello").await;

    assert_eq!(rule, "greeting");
    assert!(content.starts_with("Hello! 👋 Welcome to Adithya Constructions."));
}

#[tokio::test(start_paused = true)]
async fn test_unrecognised_input_falls_back_to_whatsapp() {
    let session = new_session();
    let reply = session
        .submit("asdkjasd")
        .unwrap()
        .wait()
        .await
        .unwrap();

    assert_eq!(reply.rule, FALLBACK_RULE);
    assert_eq!(reply.message.cta.len(), 1);
    assert_eq!(reply.message.cta[0].label, "WhatsApp Owner");
    assert!(reply.message.cta[0]
        .href
        .starts_with("https://wa.me/916374507535?text="));
}

#[tokio::test(start_paused = true)]
async fn test_compare_two_configurations() {
    let session = new_session();
    let (content, rule) = ask(&session, "compare 2bhk and 3bhk").await;

    assert_eq!(rule, "bhk_comparison");
    assert!(content.starts_with("**📊 Comparing 2BHK vs 3BHK:**"));
    assert!(content.contains("**2BHK:**"));
    assert!(content.contains("**3BHK:**"));
}

#[tokio::test(start_paused = true)]
async fn test_tamil_area_units() {
    let session = new_session();
    let (content, rule) = ask(&session, "1500 சதுர அடி cost").await;

    assert_eq!(rule, "area_cost");
    assert!(content.contains("Cost Estimate for 1500 sq.ft"));
}

#[tokio::test(start_paused = true)]
async fn test_queued_transcript_keeps_submission_order() {
    let analyzer = Arc::new(QueryAnalyzer::new(KnowledgeBase::builtin()));
    let session = ChatSession::new(
        analyzer,
        SessionConfig {
            ordering: ReplyOrdering::Queued,
            ..SessionConfig::default()
        },
    );
    for query in ["hello", "Cost for 3BHK", "vastu tips"] {
        session.submit(query).unwrap();
    }
    tokio::time::sleep(Duration::from_secs(5)).await;

    let transcript = session.transcript();
    let roles: Vec<Role> = transcript.iter().map(|m| m.role).collect();
    assert_eq!(
        roles,
        vec![
            Role::Assistant,
            Role::User,
            Role::User,
            Role::User,
            Role::Assistant,
            Role::Assistant,
            Role::Assistant,
        ]
    );
    assert!(transcript[4].content.starts_with("Hello! 👋"));
    assert!(transcript[5].content.contains("3BHK Cost Estimate"));
    assert_eq!(session.state(), SessionState::Idle);

    let formatted = MessageFormatter::new().format(&transcript[5].content);
    assert!(formatted.lines.len() > 5);
}

#[tokio::test(start_paused = true)]
async fn test_interleaved_ordering_matches_timer_behaviour() {
    let analyzer = Arc::new(QueryAnalyzer::new(KnowledgeBase::builtin()));
    let session = ChatSession::new(
        analyzer,
        SessionConfig {
            ordering: ReplyOrdering::Interleaved,
            ..SessionConfig::default()
        },
    );

    session.submit("hello").unwrap();
    tokio::time::sleep(Duration::from_millis(300)).await;
    session.submit("vastu tips").unwrap();
    tokio::time::sleep(Duration::from_secs(1)).await;

    let roles: Vec<Role> = session.transcript().iter().map(|m| m.role).collect();
    assert_eq!(
        roles,
        vec![
            Role::Assistant,
            Role::User,
            Role::User,
            Role::Assistant,
            Role::Assistant,
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_events_report_each_append() {
    let session = new_session();
    let mut events = session.subscribe();

    session.submit("hello").unwrap().wait().await.unwrap();

    let mut appended = 0;
    while let Ok(event) = events.try_recv() {
        if let SessionEvent::MessageAppended(_) = event {
            appended += 1;
        }
    }
    assert_eq!(appended, 2);
}

//! Planning guidance: vastu, rooms, approvals, phases and home features

use construction_assistant_config::{addon_ids, KnowledgeBase};
use construction_assistant_core::{format_inr, Reply};

use crate::domain_tools::topics::{InteriorFocus, PhaseFocus, RoomFocus};

pub fn vastu(kb: &KnowledgeBase) -> Reply {
    let mut reply = Reply::builder().heading("🧭 Vastu Guidelines:").blank();
    for rule in &kb.vastu {
        reply = reply.field(&rule.area, &rule.guidance);
    }
    reply
        .blank()
        .tip("Note: Vastu is a guideline. We can design plans that balance Vastu principles with practical functionality and modern architecture.")
        .build()
}

fn room_tip(focus: RoomFocus) -> &'static str {
    match focus {
        RoomFocus::Bedroom => "Master bedroom should be slightly larger (12x14 ft or more) for comfort.",
        RoomFocus::Kitchen => "L-shaped or U-shaped layouts work best. Include 2-3 ft clearance for movement.",
        RoomFocus::Bathroom => "Master bathroom can be 7x8 ft for added luxury. Ensure proper ventilation.",
        RoomFocus::All => "These are ideal sizes. Minimum sizes available on request.",
    }
}

/// Dimensions for one room, or ideal sizes for every room
pub fn room_sizes(kb: &KnowledgeBase, focus: RoomFocus) -> Reply {
    if let Some(room) = focus.key().and_then(|key| kb.room(key)) {
        return Reply::builder()
            .heading(format!("📏 {} Dimensions:", room.name))
            .blank()
            .field("Minimum Size", &room.min_size)
            .field("Ideal Size", &room.ideal_size)
            .field("Flooring", &room.flooring)
            .blank()
            .tip(room_tip(focus))
            .build();
    }

    let mut reply = Reply::builder().heading("📏 Standard Room Sizes:").blank();
    for room in &kb.rooms {
        reply = reply.field(&room.name, &room.ideal_size);
    }
    reply.blank().tip(room_tip(RoomFocus::All)).build()
}

pub fn approvals(kb: &KnowledgeBase) -> Reply {
    let approvals = &kb.approvals;
    Reply::builder()
        .heading("📋 Approvals & Documentation:")
        .blank()
        .heading("Required Approvals:")
        .bullets(&approvals.required)
        .blank()
        .heading("Documents Needed:")
        .bullets(&approvals.documents)
        .blank()
        .field("Timeline", &approvals.timeline)
        .blank()
        .tip("We assist with entire approval process and liaise with authorities on your behalf.")
        .build()
}

/// Foundation detail, or every phase in order
pub fn phases(kb: &KnowledgeBase, focus: PhaseFocus) -> Reply {
    if let (PhaseFocus::Foundation, Some(phase)) = (focus, kb.phase("foundation")) {
        return Reply::builder()
            .heading("🏗️ Foundation Phase:")
            .blank()
            .field("Duration", &phase.duration)
            .field("Work Included", &phase.description)
            .blank()
            .heading("Key Activities:")
            .bullets([
                "Soil testing & excavation",
                "Footing with reinforcement",
                "Plinth beam construction",
                "Anti-termite treatment",
            ])
            .blank()
            .tip("Strong foundation is crucial. We ensure proper depth and quality materials.")
            .build();
    }

    let mut reply = Reply::builder().heading("🏗️ Construction Phases:").blank();
    for phase in &kb.phases {
        reply = reply
            .field(phase.title(), &phase.duration)
            .line(&phase.description)
            .blank();
    }

    let shortest = kb.timeline.months_for(0);
    reply
        .tip(format!(
            "Total timeline: {}-{} months depending on plot size and complexity.",
            shortest, kb.timeline.beyond_months
        ))
        .build()
}

pub fn smart_home(kb: &KnowledgeBase) -> Reply {
    let mut reply = Reply::builder()
        .heading("🏠 Smart Home Integration:")
        .blank();
    for tier in &kb.smart_home.tiers {
        reply = reply
            .heading(format!("{}:", tier.name))
            .bullets(&tier.features)
            .blank();
    }
    reply
        .field("Investment", &kb.smart_home.cost)
        .blank()
        .tip("We can pre-wire your home for smart features. Best to plan during construction phase.")
        .build()
}

pub fn energy(kb: &KnowledgeBase) -> Reply {
    let mut reply = Reply::builder()
        .heading("⚡ Energy Efficiency Options:")
        .blank();
    for option in &kb.energy {
        reply = reply.field(&option.name, &option.detail);
    }
    if let Some((solar, cost)) = kb
        .additional_cost(addon_ids::SOLAR_POWER)
        .and_then(|s| s.standard_cost().map(|c| (s, c)))
    {
        reply = reply.field(
            format!("{} add-on", solar.name),
            format!("{} per {}", format_inr(solar.rate), solar.unit.as_str()),
        );
        reply = reply.line(format!(
            "Typical {} {} system: {}",
            solar.standard_quantity.unwrap_or_default(),
            solar.unit.as_str(),
            format_inr(cost)
        ));
    }
    reply
        .blank()
        .tip("These investments pay back within 5-7 years through reduced electricity bills and water savings.")
        .build()
}

pub fn warranty(kb: &KnowledgeBase) -> Reply {
    let mut reply = Reply::builder().heading("🛡️ Warranty Coverage:").blank();
    for term in &kb.warranty {
        reply = reply.field(&term.component, &term.coverage);
    }
    reply
        .blank()
        .tip("We stand behind our work with comprehensive warranties. Free service visits during warranty period.")
        .build()
}

pub fn maintenance(kb: &KnowledgeBase) -> Reply {
    let mut reply = Reply::builder()
        .heading("🔧 Maintenance Guidelines:")
        .blank();
    for schedule in &kb.maintenance {
        reply = reply
            .heading(format!("{}:", schedule.interval))
            .bullets(&schedule.tasks)
            .blank();
    }
    reply
        .tip("Regular maintenance extends life of your home and prevents major repairs.")
        .build()
}

/// Interior works, optionally focused on modular kitchens
pub fn interior(focus: InteriorFocus) -> Reply {
    match focus {
        InteriorFocus::ModularKitchen => Reply::builder()
            .heading("🍳 Modular Kitchen:")
            .blank()
            .field("Basic Package", "₹80,000 - ₹1,50,000")
            .bullets(["Standard laminate finish", "Basic hardware", "8-10 ft length"])
            .blank()
            .field("Premium Package", "₹1,50,000 - ₹3,00,000")
            .bullets([
                "High-gloss finish",
                "Soft-close hinges",
                "Granite/Quartz countertop",
                "Chimney & hob included",
            ])
            .blank()
            .field("Luxury Package", "₹3,00,000+")
            .bullets([
                "Imported finishes",
                "Premium appliances",
                "Full kitchen automation",
                "Designer hardware",
            ])
            .blank()
            .heading("Includes:")
            .bullets([
                "Wall & base cabinets",
                "Drawers & pull-outs",
                "Countertop",
                "Sink & accessories",
            ])
            .blank()
            .tip("Price varies based on kitchen size and material choice.")
            .build(),
        InteriorFocus::General => Reply::builder()
            .heading("🎨 Interior Works (Not included in base package):")
            .blank()
            .heading("False Ceiling:")
            .bullets([
                "Gypsum: ₹90-150/sq.ft",
                "POP: ₹80-120/sq.ft",
                "Grid ceiling: ₹60-90/sq.ft",
            ])
            .blank()
            .heading("Modular Kitchen:")
            .bullets(["Basic: ₹80,000 - ₹1,50,000", "Premium: ₹1,50,000 - ₹3,00,000"])
            .blank()
            .heading("Wardrobes:")
            .bullets([
                "Per bedroom: ₹40,000 - ₹1,20,000",
                "Sliding vs hinged doors",
                "Loft options available",
            ])
            .blank()
            .heading("TV Unit & Furniture:")
            .bullets(["TV unit: ₹25,000 - ₹80,000", "Crockery unit: ₹40,000 - ₹1,00,000"])
            .blank()
            .heading("Complete Interior Package:")
            .bullets(["2BHK: ₹4-8 lakhs", "3BHK: ₹6-12 lakhs", "4BHK: ₹8-15 lakhs"])
            .blank()
            .tip("Interior work best done during finishing phase. We can coordinate!")
            .build(),
    }
}

pub fn parking(kb: &KnowledgeBase) -> Reply {
    let stilt_rate = kb
        .additional_cost(addon_ids::CAR_PARKING)
        .map(|p| p.rate)
        .unwrap_or(1800);

    Reply::builder()
        .heading("🚗 Parking Options:")
        .blank()
        .heading("Open Parking:")
        .bullets([
            "Included in plot planning",
            "Ground level space",
            "For 1-2 cars depending on plot",
        ])
        .blank()
        .heading("Covered Parking:")
        .bullets([
            "Car porch with shade",
            "Cost: ₹1,80,000 - ₹2,50,000",
            "Protects from weather",
        ])
        .blank()
        .heading("Stilt Parking:")
        .bullets(["Separate parking floor", "Living space on upper floors"])
        .bullet(format!("Cost: {}/sq.ft", format_inr(stilt_rate)))
        .bullet("Ideal for G+1, G+2 buildings")
        .blank()
        .heading("Underground Parking:")
        .bullets([
            "Premium option for villas",
            "Requires waterproofing",
            "Cost: ₹2200-2500/sq.ft",
            "Maximizes ground usage",
        ])
        .blank()
        .tip("Most 30x40 plots accommodate 1-2 car parking. Larger plots can fit more vehicles.")
        .build()
}

pub fn stilt_basement(kb: &KnowledgeBase) -> Reply {
    let stilt_rate = kb
        .additional_cost(addon_ids::CAR_PARKING)
        .map(|p| p.rate)
        .unwrap_or(1800);

    Reply::builder()
        .heading("🏢 Stilt/Basement Construction:")
        .blank()
        .heading("Stilt Floor (Ground Parking):")
        .bullets([
            "Entire ground as parking",
            "Living space starts from 1st floor",
        ])
        .bullet(format!("Cost: {}/sq.ft", format_inr(stilt_rate)))
        .bullets(["Popular for urban homes", "Saves land, maximizes usage"])
        .blank()
        .heading("Basement:")
        .bullets([
            "Underground construction",
            "Requires dewatering",
            "Extra waterproofing essential",
            "Cost: ₹2200-2800/sq.ft",
            "Uses: Parking, storage, gym",
        ])
        .blank()
        .heading("Specifications:")
        .bullets([
            "Proper ventilation mandatory",
            "Drainage system required",
            "Fire safety compliance",
            "Separate electrical board",
        ])
        .blank()
        .heading("Approvals:")
        .bullets([
            "Building plan must show basement/stilt",
            "Structural stability certificate",
            "Fire NOC for basement",
        ])
        .blank()
        .tip("Basement construction is 30-40% more expensive but adds significant utility space!")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vastu_lists_rules_in_order() {
        let kb = KnowledgeBase::builtin();
        let text = vastu(&kb).to_markup();
        let door = text.find("**Main Door:** East or North facing preferred").unwrap();
        let stairs = text.find("**Staircase:**").unwrap();
        assert!(door < stairs);
    }

    #[test]
    fn test_room_sizes_focus() {
        let kb = KnowledgeBase::builtin();
        let kitchen = room_sizes(&kb, RoomFocus::Kitchen).plain_text();
        assert!(kitchen.starts_with("📏 Kitchen Dimensions:"));
        assert!(kitchen.contains("Minimum Size: 8x10 ft"));
        assert!(kitchen.contains("L-shaped or U-shaped"));

        let all = room_sizes(&kb, RoomFocus::All).plain_text();
        assert!(all.contains("Living Room: 14x16 ft"));
        assert!(all.contains("Balcony: 5x8 ft"));
    }

    #[test]
    fn test_phases_foundation_focus() {
        let kb = KnowledgeBase::builtin();
        let text = phases(&kb, PhaseFocus::Foundation).plain_text();
        assert!(text.contains("Duration: 4-6 weeks"));
        assert!(text.contains("• Anti-termite treatment"));
    }

    #[test]
    fn test_phases_all_in_order() {
        let kb = KnowledgeBase::builtin();
        let text = phases(&kb, PhaseFocus::All).plain_text();
        let planning = text.find("Planning: 2-4 weeks").unwrap();
        let finishing = text.find("Finishing: 2-3 weeks").unwrap();
        assert!(planning < finishing);
        assert!(text.contains("Total timeline: 7-15 months"));
    }

    #[test]
    fn test_smart_home_and_maintenance() {
        let kb = KnowledgeBase::builtin();
        let smart = smart_home(&kb).plain_text();
        assert!(smart.contains("Advanced Package:\n• Home automation system"));
        assert!(smart.contains("Investment: ₹50,000 - ₹3,00,000 depending on features"));

        let upkeep = maintenance(&kb).plain_text();
        assert!(upkeep.contains("10-Year Maintenance:\n• Major renovation assessment"));
    }

    #[test]
    fn test_energy_includes_solar_add_on() {
        let kb = KnowledgeBase::builtin();
        let text = energy(&kb).plain_text();
        assert!(text.contains("Rainwater Harvesting: Harvesting system: ₹40,000-80,000"));
        assert!(text.contains("Typical 2 kW system: ₹1,20,000"));
    }

    #[test]
    fn test_interior_focus() {
        let kitchen = interior(InteriorFocus::ModularKitchen).plain_text();
        assert!(kitchen.starts_with("🍳 Modular Kitchen:"));
        let general = interior(InteriorFocus::General).plain_text();
        assert!(general.contains("3BHK: ₹6-12 lakhs"));
    }

    #[test]
    fn test_parking_uses_stilt_rate() {
        let kb = KnowledgeBase::builtin();
        assert!(parking(&kb).plain_text().contains("Cost: ₹1,800/sq.ft"));
        assert!(stilt_basement(&kb).plain_text().contains("Cost: ₹1,800/sq.ft"));
    }
}

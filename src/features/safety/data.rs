use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContact {
    pub name: &'static str,
    pub phone: &'static str,
    pub description: &'static str,
    pub available: &'static str,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SafetyTip {
    pub category: &'static str,
    pub title: &'static str,
    pub tip: &'static str,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SafetyResource {
    pub name: &'static str,
    pub url: &'static str,
    pub description: &'static str,
}

pub const EMERGENCY_CONTACTS: &[EmergencyContact] = &[
    EmergencyContact {
        name: "Emergency Services",
        phone: "911",
        description: "Police, fire, and medical emergencies",
        available: "24/7",
    },
    EmergencyContact {
        name: "Poison Control",
        phone: "1-800-222-1222",
        description: "Poison exposure and overdose guidance",
        available: "24/7",
    },
    EmergencyContact {
        name: "Non-Emergency Police",
        phone: "311",
        description: "Noise complaints, minor incidents, follow-ups",
        available: "24/7",
    },
    EmergencyContact {
        name: "Crisis Lifeline",
        phone: "988",
        description: "Suicide and mental health crisis support",
        available: "24/7",
    },
    EmergencyContact {
        name: "Gas Leak Hotline",
        phone: "1-800-427-2200",
        description: "Suspected gas leaks and odors",
        available: "24/7",
    },
];

pub const SAFETY_TIPS: &[SafetyTip] = &[
    SafetyTip {
        category: "home",
        title: "Light your entryways",
        tip: "Motion-activated lighting at doors and along walkways deters most opportunistic break-ins.",
    },
    SafetyTip {
        category: "home",
        title: "Lock up even when home",
        tip: "Keep doors and ground-floor windows locked during the day, not just overnight.",
    },
    SafetyTip {
        category: "vehicle",
        title: "Nothing visible in the car",
        tip: "Bags, chargers, and loose change in view are the most common trigger for window smashes.",
    },
    SafetyTip {
        category: "vehicle",
        title: "Park in lit areas",
        tip: "Choose spots under streetlights or near building entrances when parking overnight.",
    },
    SafetyTip {
        category: "walking",
        title: "Stay aware at night",
        tip: "Keep one ear free of headphones and stick to routes with foot traffic after dark.",
    },
    SafetyTip {
        category: "walking",
        title: "Share your route",
        tip: "Let someone know your expected arrival time when walking alone at night.",
    },
    SafetyTip {
        category: "reporting",
        title: "Report promptly",
        tip: "File incident reports within hours, not days. Fresh reports give neighbors time to react.",
    },
    SafetyTip {
        category: "reporting",
        title: "Describe, don't confront",
        tip: "Note descriptions and directions of travel from a safe distance, never approach a suspect.",
    },
];

pub const SAFETY_RESOURCES: &[SafetyResource] = &[
    SafetyResource {
        name: "Ready.gov",
        url: "https://www.ready.gov",
        description: "Disaster preparedness checklists and family emergency plans",
    },
    SafetyResource {
        name: "National Neighborhood Watch",
        url: "https://www.nnw.org",
        description: "Guides for starting and running a neighborhood watch group",
    },
    SafetyResource {
        name: "Red Cross Emergency App",
        url: "https://www.redcross.org/get-help/how-to-prepare-for-emergencies/mobile-apps.html",
        description: "Severe weather and emergency alerts with first-aid references",
    },
    SafetyResource {
        name: "FBI Crime Data Explorer",
        url: "https://cde.ucr.cjis.gov",
        description: "Public crime statistics by region and offense type",
    },
];

//! Fixed advice shown alongside every set of results.
//!
//! None of this is derived from the reported symptoms.

use serde::Serialize;

/// An over-the-counter medicine suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Medicine {
    pub name: &'static str,
    pub dosage: &'static str,
    pub purpose: &'static str,
}

/// A titled lifestyle recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LifestyleAdvice {
    pub title: &'static str,
    pub description: &'static str,
}

pub const MEDICINES: [Medicine; 3] = [
    Medicine {
        name: "Paracetamol",
        dosage: "500mg every 6 hours",
        purpose: "Pain relief and fever reduction",
    },
    Medicine {
        name: "Ibuprofen",
        dosage: "400mg every 8 hours",
        purpose: "Anti-inflammatory and pain relief",
    },
    Medicine {
        name: "Throat Lozenges",
        dosage: "As needed",
        purpose: "Soothe throat irritation",
    },
];

pub const HOME_REMEDIES: [&str; 5] = [
    "Drink plenty of warm fluids like herbal tea or warm water with honey",
    "Get adequate rest - aim for 7-8 hours of sleep",
    "Eat light, easily digestible foods like curd rice or coconut water",
    "Use a humidifier or breathe steam from hot water",
    "Gargle with warm salt water for throat relief",
];

pub const LIFESTYLE_ADVICE: [LifestyleAdvice; 4] = [
    LifestyleAdvice {
        title: "Rest Required",
        description: "Take time off work/school for 2-3 days",
    },
    LifestyleAdvice {
        title: "Stay Indoors",
        description: "Avoid outdoor activities until symptoms improve",
    },
    LifestyleAdvice {
        title: "Limit Social Contact",
        description: "Minimize contact with others to prevent spread",
    },
    LifestyleAdvice {
        title: "Monitor Symptoms",
        description: "Track your symptoms and seek help if they worsen",
    },
];

pub const IMPORTANT_NOTICE: &str = "This AI assessment is for informational purposes only and \
should not replace professional medical advice. Please consult a healthcare provider for proper \
diagnosis and treatment.";

/// All advice blocks bundled together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdviceSheet {
    pub medicines: &'static [Medicine],
    pub home_remedies: &'static [&'static str],
    pub lifestyle_advice: &'static [LifestyleAdvice],
    pub notice: &'static str,
}

/// The advice shown with every result.
pub const ADVICE_SHEET: AdviceSheet = AdviceSheet {
    medicines: &MEDICINES,
    home_remedies: &HOME_REMEDIES,
    lifestyle_advice: &LIFESTYLE_ADVICE,
    notice: IMPORTANT_NOTICE,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advice_sheet_serialises_every_block() {
        let value = serde_json::to_value(ADVICE_SHEET).unwrap();
        assert_eq!(value["medicines"].as_array().unwrap().len(), 3);
        assert_eq!(value["medicines"][0]["name"], "Paracetamol");
        assert_eq!(value["home_remedies"].as_array().unwrap().len(), 5);
        assert_eq!(value["lifestyle_advice"][3]["title"], "Monitor Symptoms");
        assert!(value["notice"]
            .as_str()
            .unwrap()
            .contains("should not replace professional medical advice"));
    }
}

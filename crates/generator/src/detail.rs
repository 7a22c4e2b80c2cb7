/// Known service lines with dedicated page content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Excavation,
    RoadConstruction,
    Demolition,
    Earthmoving,
    EquipmentRental,
    /// Any catalog service without dedicated content
    Unknown,
}

impl ServiceKind {
    pub fn from_slug(slug: &str) -> Self {
        match slug {
            "excavation" => ServiceKind::Excavation,
            "road-construction" => ServiceKind::RoadConstruction,
            "demolition" => ServiceKind::Demolition,
            "earthmoving" => ServiceKind::Earthmoving,
            "equipment-rental" => ServiceKind::EquipmentRental,
            _ => ServiceKind::Unknown,
        }
    }

    /// Page content for this service. `Unknown` renders the excavation content.
    pub fn detail(self) -> &'static ServiceDetail {
        match self {
            ServiceKind::Excavation | ServiceKind::Unknown => &EXCAVATION,
            ServiceKind::RoadConstruction => &ROAD_CONSTRUCTION,
            ServiceKind::Demolition => &DEMOLITION,
            ServiceKind::Earthmoving => &EARTHMOVING,
            ServiceKind::EquipmentRental => &EQUIPMENT_RENTAL,
        }
    }

    pub fn is_known(self) -> bool {
        self != ServiceKind::Unknown
    }
}

/// Long-form content for a service page
#[derive(Debug, PartialEq)]
pub struct ServiceDetail {
    pub icon: &'static str,
    pub full_description: &'static str,
    pub features: &'static [&'static str],
    pub equipment: &'static [&'static str],
    pub applications: &'static [&'static str],
}

pub static EXCAVATION: ServiceDetail = ServiceDetail {
    icon: "🏗️",
    full_description: "Professional excavation services using modern JCB excavators for all types of digging, foundation work, and site preparation.",
    features: &[
        "Foundation Excavation",
        "Basement Digging",
        "Trenching",
        "Site Preparation",
        "Utility Installation",
        "Drainage Work",
    ],
    equipment: &["JCB 3DX", "JCB 4DX", "Mini Excavators", "Track Excavators"],
    applications: &[
        "Residential Construction",
        "Commercial Projects",
        "Infrastructure Development",
        "Utility Work",
    ],
};

pub static ROAD_CONSTRUCTION: ServiceDetail = ServiceDetail {
    icon: "🛣️",
    full_description: "Expert road construction services with specialized JCB equipment for building, repairing, and maintaining roads and highways.",
    features: &[
        "Road Building",
        "Surface Repair",
        "Highway Construction",
        "Path Creation",
        "Asphalt Work",
        "Concrete Roads",
    ],
    equipment: &["JCB Road Grader", "JCB Compactor", "JCB Loader", "Road Roller"],
    applications: &["Highway Construction", "City Roads", "Rural Roads", "Private Roads"],
};

pub static DEMOLITION: ServiceDetail = ServiceDetail {
    icon: "🏚️",
    full_description: "Safe and efficient demolition services using specialized JCB equipment for controlled building and structure removal.",
    features: &[
        "Building Demolition",
        "Structure Removal",
        "Selective Demolition",
        "Site Clearance",
        "Debris Removal",
        "Waste Management",
    ],
    equipment: &[
        "JCB Demolition Excavator",
        "Hydraulic Breaker",
        "Demolition Attachments",
        "Safety Equipment",
    ],
    applications: &[
        "Residential Demolition",
        "Commercial Demolition",
        "Industrial Demolition",
        "Renovation Projects",
    ],
};

pub static EARTHMOVING: ServiceDetail = ServiceDetail {
    icon: "⛰️",
    full_description: "Comprehensive earthmoving services for land preparation, grading, and landscaping using powerful JCB equipment.",
    features: &[
        "Land Leveling",
        "Soil Moving",
        "Grading",
        "Cut and Fill",
        "Slope Preparation",
        "Landscaping",
    ],
    equipment: &[
        "JCB Backhoe Loader",
        "JCB Wheel Loader",
        "JCB Dozer",
        "Grading Equipment",
    ],
    applications: &[
        "Site Development",
        "Landscaping Projects",
        "Agricultural Land Preparation",
        "Industrial Sites",
    ],
};

pub static EQUIPMENT_RENTAL: ServiceDetail = ServiceDetail {
    icon: "🚜",
    full_description: "Complete construction equipment rental services with a wide range of JCB machinery for all construction needs.",
    features: &[
        "Daily Rental",
        "Weekly Rental",
        "Monthly Rental",
        "Operator Included",
        "Maintenance Included",
        "Fuel Included",
    ],
    equipment: &[
        "All JCB Models",
        "Excavators",
        "Loaders",
        "Compactors",
        "Specialized Attachments",
    ],
    applications: &[
        "Construction Projects",
        "Infrastructure Development",
        "Emergency Services",
        "Temporary Projects",
    ],
};

/// One row of the rate card, amounts in rupees
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceTier {
    pub label: &'static str,
    pub low: u32,
    pub high: u32,
    pub unit: &'static str,
    pub note: &'static str,
}

const LAKH: u32 = 100_000;

impl PriceTier {
    /// "₹800-1200", or in lakhs once both ends reach one lakh: "₹1.5L-2L"
    pub fn range(&self) -> String {
        if self.low >= LAKH && self.high >= LAKH {
            format!("₹{}L-{}L", lakhs(self.low), lakhs(self.high))
        } else {
            format!("₹{}-{}", self.low, self.high)
        }
    }

    /// Bare numeric range for schema.org offers, e.g. "800-1200"
    pub fn plain_range(&self) -> String {
        format!("{}-{}", self.low, self.high)
    }
}

fn lakhs(amount: u32) -> String {
    let whole = amount / LAKH;
    let tenths = (amount % LAKH) / (LAKH / 10);
    if tenths == 0 {
        whole.to_string()
    } else {
        format!("{}.{}", whole, tenths)
    }
}

/// Rate card shown on every service page regardless of service or location
pub const PRICING: [PriceTier; 3] = [
    PriceTier {
        label: "Hourly Rate",
        low: 800,
        high: 1200,
        unit: "per hour",
        note: "Per hour with operator",
    },
    PriceTier {
        label: "Daily Rate",
        low: 6000,
        high: 8000,
        unit: "per day",
        note: "8-hour shift included",
    },
    PriceTier {
        label: "Monthly Rate",
        low: 150_000,
        high: 200_000,
        unit: "per month",
        note: "Best value for long projects",
    },
];

pub fn hourly_rate() -> &'static PriceTier {
    &PRICING[0]
}

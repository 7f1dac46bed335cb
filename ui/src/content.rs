//! Everything the page says. Rendered verbatim, never computed.

use crate::state::SectionId;

pub struct Conference {
    pub brand: &'static str,
    pub edition: &'static str,
    pub tagline: &'static str,
    pub date: &'static str,
    pub description: &'static str,
}

pub const CONFERENCE: Conference = Conference {
    brand: "ICDAIC",
    edition: "ICDAIC'24",
    tagline: "International Level Conference",
    date: "April 06 2024",
    description: "ICDAIC'24, a conference on data analytics and intelligent computing held at Velammal Institute of Technology on April 06 2024.",
};

pub static ABOUT: [&str; 2] = [
    "ICDAIC'24 is a national level technical conference that is to be held on April 06 2024. \
     The event focuses on gathering the various project ideas of people about data analytics \
     and intelligence computing in both online and offline mode.",
    "The event is a coordinated event that is to be held on both online as well as offline mode. \
     We welcome participants from all over India. The participants can present their project \
     ideas through either offline mode or offline mode based on their convenience.",
];

pub struct FeeTier {
    pub audience: &'static str,
    pub amount: &'static str,
}

pub static FEE_TIERS: [FeeTier; 3] = [
    FeeTier {
        audience: "UG Students",
        amount: "₹500/-",
    },
    FeeTier {
        audience: "PG Students & Research Scholars / Academicians",
        amount: "₹1000/-",
    },
    FeeTier {
        audience: "Industrialist",
        amount: "₹1500/-",
    },
];

pub const REGISTRATION_FORM_URL: &str = "https://forms.gle/dqVcdcFPZum14p3RA";
pub const REGISTRATION_QR_URL: &str =
    "https://api.qrserver.com/v1/create-qr-code/?size=300x300&data=https://forms.gle/dqVcdcFPZum14p3RA";

pub struct Patron {
    pub name: &'static str,
    pub designation: &'static str,
}

pub struct PatronGroup {
    pub role: &'static str,
    pub members: &'static [Patron],
}

pub static PATRONS: [PatronGroup; 3] = [
    PatronGroup {
        role: "Chief Patron",
        members: &[Patron {
            name: "Shri. M.V. Muthuramalingam",
            designation: "Chairman, Velammal Institute of Technology",
        }],
    },
    PatronGroup {
        role: "Patron",
        members: &[Patron {
            name: "Shri. M. V. M. Sasikumar",
            designation: "Director, Velammal Education Trust",
        }],
    },
    PatronGroup {
        role: "Co-Patrons",
        members: &[
            Patron {
                name: "Shri. K. Razak",
                designation: "Advisor, Velammal Institute of Technology",
            },
            Patron {
                name: "Shri. M. Vaasu",
                designation: "Advisor, Velammal Institute of Technology",
            },
            Patron {
                name: "Dr. N. Balaji",
                designation: "Principal, Velammal Institute of Technology",
            },
            Patron {
                name: "Dr. S. Soundararajan",
                designation: "Vice Principal, Velammal Institute of Technology",
            },
        ],
    },
];

pub struct Track {
    pub title: &'static str,
    pub topics: &'static [&'static str],
}

pub static TRACKS: [Track; 2] = [
    Track {
        title: "Track I",
        topics: &[
            "Data analytics and data engineering",
            "Knowledge engineering",
            "Data management",
            "Business analytics",
            "Big Data Analytics",
            "Web data management and development",
        ],
    },
    Track {
        title: "Track II",
        topics: &[
            "Deep learning in autonomous systems",
            "Intelligent process control",
            "Autonomous Vehicles",
            "Cyber physical system",
            "Smart energy system",
            "Half healing network",
            "Automatic customer service",
            "Autonomous underwater Vehicles",
        ],
    },
];

pub struct KeyDate {
    pub title: &'static str,
    pub date: &'static str,
}

pub static KEY_DATES: [KeyDate; 4] = [
    KeyDate {
        title: "Abstract submission",
        date: "15/03/2024",
    },
    KeyDate {
        title: "Full paper submission",
        date: "18/03/2024",
    },
    KeyDate {
        title: "Intimation of acceptance",
        date: "20/03/2024",
    },
    KeyDate {
        title: "Camera ready paper for registration",
        date: "26/03/2024",
    },
];

pub struct Venue {
    pub name: &'static str,
    pub address: &'static str,
    pub directions_url: &'static str,
    pub map_embed_url: &'static str,
}

pub const VENUE: Venue = Venue {
    name: "Velammal Institute of Technology",
    address: "Panchetti, Chennai - Kolkata Hwy, Tamil Nadu 601204",
    directions_url: "https://maps.app.goo.gl/WefYavNhxPj84kLC9",
    map_embed_url: "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d4444.0962368136!2d80.14929769999999!3d13.2944135!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x3a527efa08e09967%3A0xc1b057bb21ab2483!2sVelammal%20Institute%20of%20Technology!5e1!3m2!1sen!2sin!4v1740544332352!5m2!1sen!2sin",
};

pub struct Contact {
    pub phone: &'static str,
    pub email: &'static str,
    pub website: &'static str,
}

pub const CONTACT: Contact = Contact {
    phone: "+91 9876543210",
    email: "contact@icdaic.com",
    website: "www.icdaic.com",
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LinkTarget {
    /// Leaves the page (or downloads).
    Href(&'static str),
    /// In-page jump, offset below the navbar.
    Section(SectionId),
}

pub struct QuickLink {
    pub label: &'static str,
    pub target: LinkTarget,
}

// files are served by `site` from assets/
pub static QUICK_LINKS: [QuickLink; 3] = [
    QuickLink {
        label: "Download Brochure",
        target: LinkTarget::Href("/assets/brochure.pdf"),
    },
    QuickLink {
        label: "Paper Submission Guidelines",
        target: LinkTarget::Href("/assets/paper-guidelines.pdf"),
    },
    QuickLink {
        label: "Registration Process",
        target: LinkTarget::Section(SectionId::Registration),
    },
];

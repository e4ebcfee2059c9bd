//! Static copy for the service and case-study pages.

pub struct Offering {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Service {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub offerings: &'static [Offering],
}

pub struct CaseStudy {
    pub slug: &'static str,
    pub title: &'static str,
    pub client: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
    pub chapters: &'static [Offering],
}

pub const SERVICES: &[Service] = &[
    Service {
        slug: "creatives",
        title: "Creatives",
        summary: "UGC, ad campaigns, reels, and content strategy that captures attention.",
        offerings: &[
            Offering {
                title: "UGC Content",
                description: "Authentic user-generated style content that resonates with your audience and drives engagement.",
            },
            Offering {
                title: "Ad Campaigns",
                description: "High-converting ad creatives for Facebook, Instagram, TikTok, and other platforms.",
            },
            Offering {
                title: "Reels & Short-form",
                description: "Viral-worthy short-form content that captures attention in seconds.",
            },
            Offering {
                title: "Content Strategy",
                description: "Data-driven content strategies that align with your brand goals and audience preferences.",
            },
        ],
    },
    Service {
        slug: "web",
        title: "Web",
        summary: "High-conversion coded websites with smooth animations and modern design.",
        offerings: &[
            Offering {
                title: "Custom Development",
                description: "Hand-coded websites built with modern frameworks for optimal performance and flexibility.",
            },
            Offering {
                title: "Modern Design",
                description: "Beautiful, conversion-focused designs that align with your brand and captivate your audience.",
            },
            Offering {
                title: "Smooth Animations",
                description: "Micro-interactions and animations that create memorable user experiences.",
            },
            Offering {
                title: "Responsive & Fast",
                description: "Lightning-fast websites that look perfect on every device and screen size.",
            },
        ],
    },
    Service {
        slug: "labs",
        title: "Labs",
        summary: "Automations, CRMs, WhatsApp flows, and integrations that scale.",
        offerings: &[
            Offering {
                title: "Lead & Follow-up Automation",
                description: "Every enquiry captured, tagged and followed up without anyone copying rows by hand.",
            },
            Offering {
                title: "CRM & Pipeline Setup",
                description: "One pipeline for every lead, with stages your team actually uses.",
            },
            Offering {
                title: "WhatsApp Workflows",
                description: "Booking confirmations, reminders and re-engagement sent where your customers already are.",
            },
            Offering {
                title: "Tool Integrations",
                description: "Forms, sheets, calendars and payment tools wired together so data moves on its own.",
            },
        ],
    },
];

const STORY_CREATIVES: Offering = Offering {
    title: "Creatives",
    description: "Story-first reels and ad creatives built around the people and the work, not discounts.",
};
const STORY_WEB: Offering = Offering {
    title: "Web",
    description: "A fast site where the main action, booking or enquiring, is never more than one tap away.",
};
const STORY_LABS: Offering = Offering {
    title: "Labs",
    description: "Follow-ups, reminders and feedback requests that run on their own once a lead comes in.",
};

pub const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        slug: "looks-salon",
        title: "Salons",
        client: "Looks Salon",
        summary: "Reels that feel premium. A booking-first website. Retention automations that bring clients back.",
        tags: &["Creatives", "Website", "Retention"],
        chapters: &[STORY_CREATIVES, STORY_WEB, STORY_LABS],
    },
    CaseStudy {
        slug: "restaurant",
        title: "Restaurants & Cafés",
        client: "Restaurant",
        summary: "Content that makes people crave. A fast menu/booking website. Loyalty + feedback flows on autopilot.",
        tags: &["Creatives", "Website", "Automation"],
        chapters: &[STORY_CREATIVES, STORY_WEB, STORY_LABS],
    },
    CaseStudy {
        slug: "anchor-fab",
        title: "Manufacturing & E-Commerce",
        client: "Anchor Fab",
        summary: "Product content that sells. A conversion-first site. Follow-ups, lead tracking, and re-engagement automated.",
        tags: &["Creatives", "Website", "Labs"],
        chapters: &[STORY_CREATIVES, STORY_WEB, STORY_LABS],
    },
    CaseStudy {
        slug: "real-estate",
        title: "Real Estate & Construction",
        client: "Real Estate",
        summary: "Project storytelling that builds trust. A lead-first website. Automated follow-ups that drive site visits.",
        tags: &["Creatives", "Website", "Lead System"],
        chapters: &[STORY_CREATIVES, STORY_WEB, STORY_LABS],
    },
];

pub fn find_service(slug: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.slug == slug)
}

pub fn find_case_study(slug: &str) -> Option<&'static CaseStudy> {
    CASE_STUDIES.iter().find(|c| c.slug == slug)
}

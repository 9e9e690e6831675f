pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub cadence: &'static str,
    pub featured: bool,
    pub perks: &'static [&'static str],
}

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Self-Paced",
        price: "$199",
        cadence: "one-time",
        featured: false,
        perks: &[
            "All 8 weeks of recorded lessons",
            "Project starter repositories",
            "Community forum access",
        ],
    },
    Plan {
        name: "Cohort",
        price: "$499",
        cadence: "per cohort",
        featured: true,
        perks: &[
            "Live weekly sessions",
            "Code review on every project",
            "Private cohort channel",
            "Certificate of completion",
        ],
    },
    Plan {
        name: "Mentorship",
        price: "$999",
        cadence: "per cohort",
        featured: false,
        perks: &[
            "Everything in Cohort",
            "Four 1:1 mentor calls",
            "Portfolio and interview prep",
        ],
    },
];

pub struct Week {
    pub number: u8,
    pub title: &'static str,
    pub summary: &'static str,
}

pub const WEEKS: &[Week] = &[
    Week { number: 1, title: "Python foundations", summary: "Types, functions and the standard library you will use every day." },
    Week { number: 2, title: "HTTP and the web", summary: "Requests, responses and how a browser talks to a server." },
    Week { number: 3, title: "Your first Flask app", summary: "Routing, templates and forms." },
    Week { number: 4, title: "Databases", summary: "SQL, SQLAlchemy and migrations." },
    Week { number: 5, title: "Authentication", summary: "Sessions, password hashing and protecting routes." },
    Week { number: 6, title: "APIs", summary: "JSON endpoints, validation and testing." },
    Week { number: 7, title: "Deployment", summary: "Containers, environment config and going live." },
    Week { number: 8, title: "Capstone", summary: "Ship a complete project and present it to the cohort." },
];

pub struct Problem {
    pub title: &'static str,
    pub body: &'static str,
}

pub const PROBLEMS: &[Problem] = &[
    Problem { title: "Tutorial hell", body: "You have watched hours of videos but still freeze at an empty editor." },
    Problem { title: "No feedback", body: "Nobody reviews your code, so you never know what to fix." },
    Problem { title: "Nothing shipped", body: "Half-finished projects do not land interviews." },
];

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature { icon: "🧑‍🏫", title: "Live sessions", body: "Learn alongside a small group every week." },
    Feature { icon: "🔍", title: "Code review", body: "Every project gets line-by-line feedback." },
    Feature { icon: "🚀", title: "Real deployments", body: "Each project ends up on the internet." },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "I finally deployed something I am proud of. The reviews were worth the price alone.",
        author: "Maya R.",
        role: "Junior backend developer",
    },
    Testimonial {
        quote: "The weekly deadlines kept me going when I would have quit on my own.",
        author: "Tomás G.",
        role: "Career switcher",
    },
];

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "Do I need prior programming experience?",
        answer: "Basic familiarity with any language helps, but week one covers the Python you need.",
    },
    Faq {
        question: "How much time does it take per week?",
        answer: "Plan for 6 to 8 hours: one live session plus project work.",
    },
    Faq {
        question: "When does the next cohort start?",
        answer: "Cohorts start every two months. Send us a message and we will share the exact date.",
    },
    Faq {
        question: "Can I get a refund?",
        answer: "Yes, within the first two weeks of the cohort, no questions asked.",
    },
];

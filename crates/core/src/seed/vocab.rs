//! Word pools for synthetic sample data.

/// Beneficiary names. The generator cycles through them in order.
pub const SAMPLE_NAMES: [&str; 20] = [
    "Rajesh Kumar",
    "Priya Sharma",
    "Amit Patel",
    "Sunita Devi",
    "Vikram Singh",
    "Meera Reddy",
    "Ravi Verma",
    "Anjali Gupta",
    "Suresh Yadav",
    "Kavita Joshi",
    "Manoj Tiwari",
    "Pooja Nair",
    "Arun Desai",
    "Rekha Pillai",
    "Sanjay Mehta",
    "Deepa Iyer",
    "Ramesh Choudhary",
    "Lalita Bansal",
    "Kiran Kumar",
    "Neha Agarwal",
];

/// Street names for generated addresses.
pub const STREETS: [&str; 4] = ["MG Road", "Gandhi Nagar", "Park Street", "Main Road"];

/// City appended to every generated address.
pub const CITY: &str = "Delhi";

/// Case categories.
pub const CASE_TYPES: [&str; 12] = [
    "Domestic Violence",
    "Child Custody",
    "Property Dispute",
    "Consumer Rights",
    "Labor Rights",
    "Sexual Harassment",
    "Dowry Harassment",
    "Land Dispute",
    "Employment Issue",
    "Divorce",
    "Maintenance",
    "Other",
];

/// Resolution routes.
pub const CASE_RESOLUTION_TYPES: [&str; 5] = [
    "Litigation",
    "Mediation",
    "Arbitration",
    "Legal Aid",
    "Counseling",
];

/// Courts.
pub const COURTS: [&str; 7] = [
    "District Court Delhi",
    "High Court Delhi",
    "Family Court",
    "Consumer Court",
    "Sessions Court",
    "Magistrate Court",
    "Other",
];

/// Partner organizations.
pub const ORGANIZATIONS: [&str; 5] = [
    "PACE Foundation",
    "Legal Aid Society",
    "Women's Commission",
    "Child Welfare Board",
    "Human Rights Commission",
];

/// Event categories.
pub const EVENT_TYPES: [&str; 6] = [
    "Court Hearing",
    "Counseling Session",
    "Mediation Meeting",
    "Document Submission",
    "Evidence Collection",
    "Client Meeting",
];

/// Event locations.
pub const LOCATIONS: [&str; 4] = [
    "Court Room 3",
    "Mediation Center",
    "PACE Office",
    "Legal Aid Office",
];

/// Base URL of generated document-folder links.
pub const DRIVE_FOLDER_URL: &str = "https://drive.google.com/folder";

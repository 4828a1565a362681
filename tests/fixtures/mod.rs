//! Backend response fixtures
//!
//! JSON bodies shaped like the backend's camelCase responses.

#![allow(dead_code)]

pub const EVENT_GROUP_PAGE: &str = r#"{
    "items": [
        {
            "id": 1,
            "title": "ICIS 2024",
            "photoFileName": "icis.jpg",
            "events": [
                {"id": 10, "eventGroupId": 1, "name": "Opening keynote", "linkUrl": "https://icis2024.aisconferences.org/keynote"},
                {"id": 11, "eventGroupId": 1, "name": "Doctoral consortium", "linkUrl": "https://icis2024.aisconferences.org/dc"}
            ]
        },
        {
            "id": 2,
            "title": "PLAIS EuroSymposium",
            "photoFileName": "eurosymposium.png",
            "events": []
        }
    ],
    "totalPages": 3,
    "totalItemsCount": 6,
    "itemsFrom": 1,
    "itemsTo": 2
}"#;

pub const ARTICLE_PAGE: &str = r#"{
    "items": [
        {
            "id": 5,
            "title": "Call for papers",
            "content": "<p>Submissions are <strong>open</strong> until <em>June 30</em>.</p>",
            "dateCreated": "2024-03-15T09:30:00.1234567",
            "photos": ["cfp.jpg"]
        },
        {
            "id": 6,
            "title": "General assembly",
            "content": "<p>Minutes attached.</p>",
            "snippet": "Minutes of the general assembly"
        }
    ],
    "totalPages": 1,
    "totalItemsCount": 2,
    "itemsFrom": 1,
    "itemsTo": 2
}"#;

pub const CADENCES: &str = r#"[
    {
        "id": 4,
        "name": "2024-2026",
        "position": 1,
        "members": [
            {
                "executiveMemberId": 21,
                "fullName": "Jan Kowalski",
                "department": "Management",
                "email": "jan@plais.org",
                "phone": "+48 111 222 333",
                "about": "Vice president",
                "role": "Vice President",
                "position": 2,
                "photoFileName": "jan.jpg"
            },
            {
                "executiveMemberId": 20,
                "fullName": "Anna Nowak",
                "department": "Management",
                "email": "anna@plais.org",
                "phone": "+48 444 555 666",
                "about": "President",
                "role": "President",
                "position": 1,
                "photoFileName": "anna.jpg"
            }
        ]
    }
]"#;

pub const RESOURCES: &str = r#"[
    {
        "id": 1,
        "name": "Teaching",
        "groups": [
            {
                "id": 7,
                "name": "Curricula",
                "items": [
                    {"id": 70, "name": "AIS curriculum", "url": "https://aisnet.org/page/curriculum"},
                    {"name": "Draft syllabus", "url": "https://plais.org/syllabus.pdf"}
                ]
            },
            {"id": 8, "name": "Datasets", "items": []}
        ]
    }
]"#;

pub const HOME: &str = r#"{
    "text": {"id": 1, "text": "Welcome to PLAIS"},
    "carousel": [{"id": 1, "photoFileName": "hero-1.jpg"}, {"id": 2, "photoFileName": "hero-2.jpg"}],
    "latestBulletin": {"id": 9, "title": "Bulletin 2/2024", "dateCreated": "2024-06-01T00:00:00"},
    "latestEvent": {"name": "EuroSymposium", "dateCreated": "2024-09-12T08:00:00Z"}
}"#;

pub const PHOTO_UPLOAD: &str = r#"{"fileName": "3f2a.jpg", "url": "https://api.example.org/images/3f2a.jpg"}"#;

pub const MEMBERS: &str = r#"[
    {"id": 1, "fullName": "Ewa Wiśniewska", "email": "ewa@uw.edu.pl", "university": "University of Warsaw"}
]"#;

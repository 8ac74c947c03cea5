//! The hand-curated 2024 payload.
//!
//! Festivals are listed in chronological order for the reference year.
//! Fixed-date holidays (Republic Day, Independence Day, Gandhi Jayanti,
//! Christmas) recur on the same date every year; lunar-derived ones
//! (Holi, Diwali, the Eids, ...) carry their 2024 Gregorian date and are
//! approximate by nature, as the metadata note says.

use crate::dataset::Dataset;
use crate::record::{Festival, Metadata, RegionalEvent};

fn festival(
    name: &str,
    kind: &str,
    description: &str,
    date: &str,
    regions: &[&str],
    public_holiday: bool,
) -> Festival {
    Festival {
        name: name.to_string(),
        kind: kind.to_string(),
        description: description.to_string(),
        date: date.to_string(),
        regions: regions.iter().map(|r| r.to_string()).collect(),
        public_holiday,
    }
}

fn event(
    name: &str,
    kind: &str,
    description: &str,
    date: Option<&str>,
    regions: &[&str],
    duration_days: Option<u32>,
) -> RegionalEvent {
    RegionalEvent {
        name: name.to_string(),
        kind: kind.to_string(),
        description: description.to_string(),
        date: date.map(|d| d.to_string()),
        regions: regions.iter().map(|r| r.to_string()).collect(),
        duration_days,
        frequency: None,
        next_occurrence: None,
    }
}

/// Build the full curated dataset.
pub fn dataset() -> Dataset {
    Dataset::new(metadata(), festivals(), regional_events())
}

fn metadata() -> Metadata {
    Metadata {
        title: "Indian Festivals and Regional Events".to_string(),
        description: "Hand-curated reference of major Indian festivals, national \
                      holidays and regional cultural events"
            .to_string(),
        country: "India".to_string(),
        year: 2024,
        version: "1.0.0".to_string(),
        last_updated: "2024-06-01".to_string(),
        note: "Dates of lunar-calendar festivals are approximate and may shift \
               by a day depending on moon sighting and region"
            .to_string(),
    }
}

fn festivals() -> Vec<Festival> {
    vec![
        festival(
            "New Year's Day",
            "Observance",
            "First day of the Gregorian calendar year, widely celebrated across the country",
            "2024-01-01",
            &["All India"],
            false,
        ),
        festival(
            "Lohri",
            "Harvest Festival",
            "Winter folk festival marking the end of the sowing season, celebrated with bonfires",
            "2024-01-13",
            &["Punjab", "Haryana", "Himachal Pradesh", "Delhi"],
            false,
        ),
        festival(
            "Makar Sankranti",
            "Harvest Festival",
            "Marks the sun's transit into Capricorn; kite flying and til-gud sweets",
            "2024-01-15",
            &["All India"],
            false,
        ),
        festival(
            "Pongal",
            "Harvest Festival",
            "Four-day Tamil harvest festival giving thanks to the sun god",
            "2024-01-15",
            &["Tamil Nadu", "Puducherry"],
            false,
        ),
        festival(
            "Republic Day",
            "National Holiday",
            "Commemorates the adoption of the Constitution of India in 1950",
            "2024-01-26",
            &["All India"],
            true,
        ),
        festival(
            "Vasant Panchami",
            "Religious Festival",
            "Dedicated to Saraswati, goddess of knowledge; heralds the arrival of spring",
            "2024-02-14",
            &["West Bengal", "Bihar", "Uttar Pradesh", "Punjab"],
            false,
        ),
        festival(
            "Maha Shivaratri",
            "Religious Festival",
            "Night-long vigil and fasting in honour of Shiva",
            "2024-03-08",
            &["All India"],
            true,
        ),
        festival(
            "Holi",
            "Religious Festival",
            "Festival of colours celebrating the triumph of good over evil",
            "2024-03-25",
            &["All India"],
            true,
        ),
        festival(
            "Good Friday",
            "Religious Festival",
            "Christian commemoration of the crucifixion of Jesus",
            "2024-03-29",
            &["All India"],
            true,
        ),
        festival(
            "Ugadi",
            "New Year Festival",
            "Telugu and Kannada new year, celebrated with pachadi of six tastes",
            "2024-04-09",
            &["Karnataka", "Andhra Pradesh", "Telangana"],
            false,
        ),
        festival(
            "Eid al-Fitr",
            "Religious Festival",
            "Marks the end of the Ramadan month of fasting",
            "2024-04-11",
            &["All India"],
            true,
        ),
        festival(
            "Baisakhi",
            "Harvest Festival",
            "Punjabi harvest festival and Sikh new year, commemorating the founding of the Khalsa",
            "2024-04-13",
            &["Punjab", "Haryana"],
            false,
        ),
        festival(
            "Vishu",
            "New Year Festival",
            "Malayalam new year, greeted at dawn with the Vishukkani arrangement",
            "2024-04-14",
            &["Kerala"],
            false,
        ),
        festival(
            "Ram Navami",
            "Religious Festival",
            "Celebrates the birth of Rama, seventh avatar of Vishnu",
            "2024-04-17",
            &["All India"],
            true,
        ),
        festival(
            "Buddha Purnima",
            "Religious Festival",
            "Commemorates the birth, enlightenment and passing of Gautama Buddha",
            "2024-05-23",
            &["All India"],
            true,
        ),
        festival(
            "Eid al-Adha",
            "Religious Festival",
            "Festival of sacrifice commemorating Ibrahim's devotion",
            "2024-06-17",
            &["All India"],
            true,
        ),
        festival(
            "Rath Yatra",
            "Religious Festival",
            "Chariot procession of Jagannath from the temple at Puri",
            "2024-07-07",
            &["Odisha"],
            false,
        ),
        festival(
            "Muharram",
            "Religious Festival",
            "Day of Ashura, observed with mourning processions",
            "2024-07-17",
            &["All India"],
            true,
        ),
        festival(
            "Independence Day",
            "National Holiday",
            "Commemorates independence from British rule in 1947",
            "2024-08-15",
            &["All India"],
            true,
        ),
        festival(
            "Raksha Bandhan",
            "Cultural Festival",
            "Sisters tie the rakhi thread on their brothers' wrists",
            "2024-08-19",
            &["North India", "West India"],
            false,
        ),
        festival(
            "Janmashtami",
            "Religious Festival",
            "Celebrates the birth of Krishna; dahi handi pyramids in Maharashtra",
            "2024-08-26",
            &["All India"],
            true,
        ),
        festival(
            "Ganesh Chaturthi",
            "Religious Festival",
            "Ten-day festival welcoming Ganesha with clay idols and processions",
            "2024-09-07",
            &["Maharashtra", "Karnataka", "Telangana", "Goa"],
            false,
        ),
        festival(
            "Onam",
            "Harvest Festival",
            "Keralite harvest festival honouring King Mahabali, with pookalam and boat races",
            "2024-09-15",
            &["Kerala"],
            false,
        ),
        festival(
            "Milad-un-Nabi",
            "Religious Festival",
            "Observes the birthday of the Prophet Muhammad",
            "2024-09-16",
            &["All India"],
            true,
        ),
        festival(
            "Gandhi Jayanti",
            "National Holiday",
            "Birthday of Mahatma Gandhi, observed as the International Day of Non-Violence",
            "2024-10-02",
            &["All India"],
            true,
        ),
        festival(
            "Durga Puja",
            "Religious Festival",
            "Worship of Durga over ten days, centred on elaborate pandals",
            "2024-10-09",
            &["West Bengal", "Assam", "Odisha", "Tripura"],
            false,
        ),
        festival(
            "Dussehra",
            "Religious Festival",
            "Vijayadashami, celebrating Rama's victory over Ravana with effigy burning",
            "2024-10-12",
            &["All India"],
            true,
        ),
        festival(
            "Diwali",
            "Religious Festival",
            "Festival of lights; lamps, fireworks and Lakshmi puja",
            "2024-11-01",
            &["All India"],
            true,
        ),
        festival(
            "Bhai Dooj",
            "Cultural Festival",
            "Sisters pray for their brothers' wellbeing, closing the Diwali season",
            "2024-11-03",
            &["North India"],
            false,
        ),
        festival(
            "Chhath Puja",
            "Religious Festival",
            "Four-day offerings to the sun god at riverbanks",
            "2024-11-07",
            &["Bihar", "Jharkhand", "Uttar Pradesh"],
            false,
        ),
        festival(
            "Guru Nanak Jayanti",
            "Religious Festival",
            "Birth anniversary of Guru Nanak, founder of Sikhism",
            "2024-11-15",
            &["All India"],
            true,
        ),
        festival(
            "Christmas",
            "Religious Festival",
            "Christian celebration of the birth of Jesus",
            "2024-12-25",
            &["All India"],
            true,
        ),
    ]
}

fn regional_events() -> Vec<RegionalEvent> {
    vec![
        event(
            "Jaipur Literature Festival",
            "Literary Festival",
            "The world's largest free literary festival, hosted at Diggi Palace",
            Some("2024-02-01"),
            &["Rajasthan"],
            Some(5),
        ),
        event(
            "Goa Carnival",
            "Carnival",
            "Pre-Lenten street carnival with float parades led by King Momo",
            Some("2024-02-10"),
            &["Goa"],
            Some(4),
        ),
        event(
            "Thrissur Pooram",
            "Temple Festival",
            "Temple festival famed for its caparisoned elephants and percussion ensembles",
            Some("2024-05-19"),
            &["Kerala"],
            Some(2),
        ),
        event(
            "Hemis Festival",
            "Monastic Festival",
            "Masked cham dances at Hemis monastery marking the birth of Padmasambhava",
            Some("2024-06-16"),
            &["Ladakh"],
            Some(2),
        ),
        event(
            "Ziro Festival of Music",
            "Music Festival",
            "Outdoor independent-music festival in the Ziro valley, hosted by the Apatani",
            Some("2024-09-26"),
            &["Arunachal Pradesh"],
            Some(4),
        ),
        event(
            "Pushkar Camel Fair",
            "Cultural Fair",
            "Livestock fair and pilgrimage drawing tens of thousands of camels and traders",
            Some("2024-11-09"),
            &["Rajasthan"],
            Some(7),
        ),
        event(
            "Rann Utsav",
            "Desert Festival",
            "Season-long tent city on the white salt desert of the Rann of Kutch",
            Some("2024-11-01"),
            &["Gujarat"],
            Some(120),
        ),
        event(
            "Hornbill Festival",
            "Cultural Festival",
            "Festival of festivals showcasing the heritage of all Naga tribes",
            Some("2024-12-01"),
            &["Nagaland"],
            Some(10),
        ),
        RegionalEvent {
            name: "Kumbh Mela".to_string(),
            kind: "Religious Gathering".to_string(),
            description: "Mass pilgrimage and ritual bathing at the confluence of sacred rivers"
                .to_string(),
            date: None,
            regions: vec![
                "Uttar Pradesh".to_string(),
                "Uttarakhand".to_string(),
                "Madhya Pradesh".to_string(),
                "Maharashtra".to_string(),
            ],
            duration_days: Some(45),
            frequency: Some("Every 12 years, rotating between four riverbank sites".to_string()),
            next_occurrence: Some("2025-01-13".to_string()),
        },
    ]
}

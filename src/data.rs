use crate::models::{Region, SupportInfo};

pub const DEFAULT_REGION: &str = "USA";

pub fn get_default_regions() -> Vec<Region> {
    [
        ("USA", "s1.png"),
        ("UNITED KINGDOM", "s5.png"),
        ("GERMANY", "s6.png"),
        ("JAPAN", "s4.png"),
        ("CANADA", "s3.png"),
        ("FRANCE", "s2.png"),
    ]
    .into_iter()
    .map(|(name, flag)| Region {
        name: name.to_string(),
        flag: flag.to_string(),
    })
    .collect()
}

pub fn support_info() -> SupportInfo {
    SupportInfo {
        email: "support@ikisky.com",
        telegram: "@ikisky_support",
        hours: "24/7",
    }
}

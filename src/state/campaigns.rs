//! Campaign Store
//!
//! In-memory campaign records behind the campaign manager tab. Records
//! live for the page session only; there is no persistence.

use chrono::NaiveDate;
use thiserror::Error;

/// Lifecycle state of a campaign
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CampaignStatus {
    Active,
    Paused,
    Ended,
}

impl CampaignStatus {
    /// Label shown in the status chip
    pub fn label(self) -> &'static str {
        match self {
            CampaignStatus::Active => "active",
            CampaignStatus::Paused => "paused",
            CampaignStatus::Ended => "ended",
        }
    }

    /// Badge styling for the status chip
    pub fn badge_class(self) -> &'static str {
        match self {
            CampaignStatus::Active => "bg-green-100 text-green-800 border-green-200",
            CampaignStatus::Paused => "bg-yellow-100 text-yellow-800 border-yellow-200",
            CampaignStatus::Ended => "bg-gray-100 text-gray-800 border-gray-200",
        }
    }
}

/// What kind of engagement a campaign drives
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CampaignType {
    Promotion,
    Newsletter,
    Survey,
}

impl CampaignType {
    /// All types, in the order the create form lists them
    pub const ALL: [CampaignType; 3] = [
        CampaignType::Promotion,
        CampaignType::Newsletter,
        CampaignType::Survey,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CampaignType::Promotion => "Promotion",
            CampaignType::Newsletter => "Newsletter",
            CampaignType::Survey => "Survey",
        }
    }

    /// Select option value for the type
    pub fn token(self) -> &'static str {
        match self {
            CampaignType::Promotion => "promotion",
            CampaignType::Newsletter => "newsletter",
            CampaignType::Survey => "survey",
        }
    }

    /// Icon shown next to the campaign name
    pub fn icon(self) -> &'static str {
        match self {
            CampaignType::Promotion => "📊",
            CampaignType::Newsletter => "👥",
            CampaignType::Survey => "🗓",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.token() == token)
    }
}

impl Default for CampaignType {
    fn default() -> Self {
        CampaignType::Promotion
    }
}

/// A user-created marketing campaign
#[derive(Clone, Debug, PartialEq)]
pub struct Campaign {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub status: CampaignStatus,
    pub kind: CampaignType,
    pub clicks: u32,
    pub conversions: u32,
    pub created: NaiveDate,
}

impl Campaign {
    /// Conversion rate in percent; 0 when there are no clicks yet
    pub fn conversion_rate_pct(&self) -> f64 {
        if self.clicks == 0 {
            return 0.0;
        }
        self.conversions as f64 / self.clicks as f64 * 100.0
    }
}

/// Form payload for a new campaign
#[derive(Clone, Debug, Default)]
pub struct CampaignDraft {
    pub name: String,
    pub description: String,
    pub kind: CampaignType,
}

/// Campaign creation failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CampaignError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// In-memory campaign list, insertion order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CampaignStore {
    campaigns: Vec<Campaign>,
}

impl CampaignStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the demo campaigns
    pub fn with_samples(today: NaiveDate) -> Self {
        Self {
            campaigns: vec![
                Campaign {
                    id: 1,
                    name: "Summer WiFi Promotion".to_string(),
                    description: "Get our special summer menu with WiFi access".to_string(),
                    status: CampaignStatus::Active,
                    kind: CampaignType::Promotion,
                    clicks: 1247,
                    conversions: 89,
                    created: today - chrono::Duration::days(5),
                },
                Campaign {
                    id: 2,
                    name: "Newsletter Signup".to_string(),
                    description: "Join our newsletter for exclusive offers".to_string(),
                    status: CampaignStatus::Active,
                    kind: CampaignType::Newsletter,
                    clicks: 892,
                    conversions: 234,
                    created: today - chrono::Duration::days(10),
                },
                Campaign {
                    id: 3,
                    name: "Happy Hour Special".to_string(),
                    description: "Daily happy hour 4-6 PM".to_string(),
                    status: CampaignStatus::Paused,
                    kind: CampaignType::Promotion,
                    clicks: 456,
                    conversions: 23,
                    created: today - chrono::Duration::days(15),
                },
            ],
        }
    }

    /// All campaigns, insertion order
    pub fn list(&self) -> &[Campaign] {
        &self.campaigns
    }

    pub fn is_empty(&self) -> bool {
        self.campaigns.is_empty()
    }

    /// Append a new campaign from the create form.
    ///
    /// Ids stay monotonic: max existing id + 1, so an id is never
    /// recycled even if deletion is added later.
    pub fn create(
        &mut self,
        draft: CampaignDraft,
        today: NaiveDate,
    ) -> Result<u32, CampaignError> {
        if draft.name.trim().is_empty() {
            return Err(CampaignError::MissingField("Campaign name"));
        }
        if draft.description.trim().is_empty() {
            return Err(CampaignError::MissingField("Campaign description"));
        }

        let id = self.campaigns.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        self.campaigns.push(Campaign {
            id,
            name: draft.name,
            description: draft.description,
            status: CampaignStatus::Active,
            kind: draft.kind,
            clicks: 0,
            conversions: 0,
            created: today,
        });

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 20).unwrap()
    }

    fn draft(name: &str, description: &str) -> CampaignDraft {
        CampaignDraft {
            name: name.to_string(),
            description: description.to_string(),
            kind: CampaignType::Promotion,
        }
    }

    #[test]
    fn create_rejects_empty_name() {
        let mut store = CampaignStore::new();
        let err = store.create(draft("", "Half-price coffee"), today()).unwrap_err();

        assert_eq!(err, CampaignError::MissingField("Campaign name"));
        assert!(store.is_empty());
    }

    #[test]
    fn create_rejects_whitespace_description() {
        let mut store = CampaignStore::new();
        let err = store.create(draft("Coffee Deal", "   "), today()).unwrap_err();

        assert_eq!(err, CampaignError::MissingField("Campaign description"));
        assert!(store.is_empty());
    }

    #[test]
    fn create_appends_fresh_record() {
        let mut store = CampaignStore::new();
        let id = store.create(draft("Coffee Deal", "Half-price coffee"), today()).unwrap();

        assert_eq!(store.list().len(), 1);
        let campaign = &store.list()[0];
        assert_eq!(campaign.id, id);
        assert_eq!(campaign.status, CampaignStatus::Active);
        assert_eq!(campaign.clicks, 0);
        assert_eq!(campaign.conversions, 0);
        assert_eq!(campaign.created, today());
    }

    #[test]
    fn ids_are_monotonic_over_max() {
        let mut store = CampaignStore::with_samples(today());
        let first = store.create(draft("A", "a"), today()).unwrap();
        let second = store.create(draft("B", "b"), today()).unwrap();

        assert_eq!(first, 4);
        assert_eq!(second, 5);
    }

    #[test]
    fn samples_keep_insertion_order() {
        let store = CampaignStore::with_samples(today());
        let names: Vec<_> = store.list().iter().map(|c| c.name.as_str()).collect();

        assert_eq!(
            names,
            ["Summer WiFi Promotion", "Newsletter Signup", "Happy Hour Special"]
        );
    }

    #[test]
    fn conversion_rate_rounds_to_one_decimal() {
        let store = CampaignStore::with_samples(today());
        let summer = &store.list()[0];

        // 89 / 1247 * 100 = 7.137...
        assert_eq!(format!("{:.1}", summer.conversion_rate_pct()), "7.1");
    }

    #[test]
    fn conversion_rate_is_zero_without_clicks() {
        let mut store = CampaignStore::new();
        store.create(draft("Fresh", "No traffic yet"), today()).unwrap();

        assert_eq!(store.list()[0].conversion_rate_pct(), 0.0);
    }

    #[test]
    fn type_tokens_round_trip() {
        for kind in CampaignType::ALL {
            assert_eq!(CampaignType::from_token(kind.token()), Some(kind));
        }
        assert_eq!(CampaignType::from_token("webinar"), None);
    }
}

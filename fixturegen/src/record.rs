use chrono::{DateTime, Duration, Utc};
use fake::faker::address::en::{CityName, StateAbbr, ZipCode};
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::{FreeEmail, IPv4};
use fake::faker::job::en::Title;
use fake::faker::lorem::en::{Sentence, Words};
use fake::faker::name::en::{FirstName, LastName};
use fake::faker::number::en::NumberWithFormat;
use fake::Fake;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use rust_decimal::prelude::*;
use serde::Serialize;
use uuid::Uuid;

use crate::error::GenError;

pub const NUM_DECIMAL_PLACES: u32 = 2;

/// Widest lookback for a freshly sampled last-login, in seconds.
const LOGIN_WINDOW_SECS: i64 = 365 * 24 * 60 * 60;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Department {
    Sales,
    Engineering,
    Marketing,
    #[serde(rename = "HR")]
    Hr,
    Legal,
    Support,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionTier {
    Bronze,
    Silver,
    Gold,
    Enterprise,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountStatus {
    Active,
    Churned,
    Trial,
    Delinquent,
}

/// Monthly recurring revenue, constrained to `[10.00, 5000.00]` at two
/// fraction digits.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthlyRevenue(Decimal);

/// One synthetic customer row. Field order here is the column order of the
/// written file; the serde renames are the header names.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Record {
    #[serde(rename = "ID")]
    pub id: Uuid,
    #[serde(rename = "First Name")]
    pub first_name: String,
    #[serde(rename = "Last Name")]
    pub last_name: String,
    #[serde(rename = "Email (Work)")]
    pub email_work: String,
    #[serde(rename = "Email (Personal)")]
    pub email_personal: String,
    #[serde(rename = "Phone (US)")]
    pub phone_us: String,
    #[serde(rename = "Job Title")]
    pub job_title: String,
    #[serde(rename = "Department")]
    pub department: Department,
    #[serde(rename = "Company Name")]
    pub company_name: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Zip Code")]
    pub zip_code: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "IP Address")]
    pub ip_address: String,
    #[serde(rename = "Last Login")]
    pub last_login: DateTime<Utc>,
    #[serde(rename = "Subscription Tier")]
    pub subscription_tier: SubscriptionTier,
    #[serde(rename = "MRR")]
    pub mrr: MonthlyRevenue,
    #[serde(rename = "Account Status")]
    pub account_status: AccountStatus,
    #[serde(rename = "Notes")]
    pub notes: String,
    #[serde(rename = "Tags")]
    pub tags: String,
}

impl MonthlyRevenue {
    fn min() -> Decimal {
        Decimal::new(10_00, NUM_DECIMAL_PLACES)
    }

    fn max() -> Decimal {
        Decimal::new(5_000_00, NUM_DECIMAL_PLACES)
    }

    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for MonthlyRevenue {
    type Error = GenError;
    fn try_from(mut decimal: Decimal) -> Result<Self, Self::Error> {
        decimal.rescale(NUM_DECIMAL_PLACES);
        if decimal >= MonthlyRevenue::min() && decimal <= MonthlyRevenue::max() {
            Ok(MonthlyRevenue(decimal))
        } else {
            Err(GenError::RevenueOutOfRange)
        }
    }
}

impl TryFrom<f64> for MonthlyRevenue {
    type Error = GenError;
    fn try_from(decimal: f64) -> Result<Self, Self::Error> {
        MonthlyRevenue::try_from(Decimal::from_f64(decimal).ok_or(GenError::RevenueOutOfRange)?)
    }
}

impl Distribution<MonthlyRevenue> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> MonthlyRevenue {
        // Whole cents: the draw lands in bounds at the fixed scale.
        MonthlyRevenue(Decimal::new(
            rng.gen_range(10_00_i64..=5_000_00),
            NUM_DECIMAL_PLACES,
        ))
    }
}

impl Distribution<Department> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Department {
        match rng.gen_range(0..6_u8) {
            0 => Department::Sales,
            1 => Department::Engineering,
            2 => Department::Marketing,
            3 => Department::Hr,
            4 => Department::Legal,
            _ => Department::Support,
        }
    }
}

impl Distribution<SubscriptionTier> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SubscriptionTier {
        match rng.gen_range(0..4_u8) {
            0 => SubscriptionTier::Bronze,
            1 => SubscriptionTier::Silver,
            2 => SubscriptionTier::Gold,
            _ => SubscriptionTier::Enterprise,
        }
    }
}

impl Distribution<AccountStatus> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> AccountStatus {
        match rng.gen_range(0..4_u8) {
            0 => AccountStatus::Active,
            1 => AccountStatus::Churned,
            2 => AccountStatus::Trial,
            _ => AccountStatus::Delinquent,
        }
    }
}

impl Record {
    /// Builds one fully populated record from the passed randomness source.
    ///
    /// `generated_at` anchors the last-login window (at most one year back,
    /// never in the future), so a whole run is reproducible from a seed and
    /// an instant.
    #[must_use]
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, generated_at: DateTime<Utc>) -> Self {
        let first_name: String = FirstName().fake_with_rng(rng);
        let last_name: String = LastName().fake_with_rng(rng);
        let company_name: String = CompanyName().fake_with_rng(rng);
        let email_work = work_email(&first_name, &last_name, &company_name);
        let tags: Vec<String> = Words(1..4).fake_with_rng(rng);

        Record {
            id: uuid::Builder::from_random_bytes(rng.gen()).into_uuid(),
            email_work,
            email_personal: FreeEmail().fake_with_rng(rng),
            phone_us: NumberWithFormat("(^##) ^##-####").fake_with_rng(rng),
            job_title: Title().fake_with_rng(rng),
            department: rng.gen(),
            city: CityName().fake_with_rng(rng),
            state: StateAbbr().fake_with_rng(rng),
            zip_code: ZipCode().fake_with_rng(rng),
            country: "USA".to_string(),
            ip_address: IPv4().fake_with_rng(rng),
            last_login: generated_at - Duration::seconds(rng.gen_range(0..=LOGIN_WINDOW_SECS)),
            subscription_tier: rng.gen(),
            mrr: rng.gen(),
            account_status: rng.gen(),
            notes: Sentence(4..8).fake_with_rng(rng),
            tags: tags.join(";"),
            first_name,
            last_name,
            company_name,
        }
    }
}

/// The faker set has no company-email generator, so the work address is
/// assembled from the already sampled name and employer.
fn work_email(first: &str, last: &str, company: &str) -> String {
    format!(
        "{}.{}@{}.com",
        ascii_slug(first),
        ascii_slug(last),
        ascii_slug(company)
    )
}

fn ascii_slug(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_lowercase()
}

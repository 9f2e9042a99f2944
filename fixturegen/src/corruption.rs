use chrono::{DateTime, Duration, Utc};
use rand::distributions::{Distribution, Standard};
use rand::Rng;

use crate::record::Record;

/// The ways a row can be damaged before it is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformation {
    /// Strip the phone down to a bare digit string.
    Phone,
    /// Break the work email by replacing `@` with `_at_`.
    Email,
    /// Push the last-login a year into the future.
    Date,
}

impl Distribution<Malformation> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Malformation {
        match rng.gen_range(0..3_u8) {
            0 => Malformation::Phone,
            1 => Malformation::Email,
            _ => Malformation::Date,
        }
    }
}

impl Malformation {
    /// Decides in a single weighted draw whether a row gets corrupted and in
    /// which of the three modes. `None` means the row passes through clean.
    ///
    /// # Panics
    /// Panics when `error_rate` is outside `[0.0, 1.0]`;
    /// [`DatasetConfig::new`](crate::dataset::DatasetConfig::new) rejects
    /// such rates before they reach this point.
    pub fn draw<R: Rng + ?Sized>(rng: &mut R, error_rate: f64) -> Option<Malformation> {
        if rng.gen_bool(error_rate) {
            Some(rng.gen())
        } else {
            None
        }
    }

    /// Damages exactly one field of `record` in place. The other nineteen
    /// fields are left untouched, so every written row carries at most one
    /// malformation.
    pub fn apply(self, record: &mut Record, generated_at: DateTime<Utc>) {
        match self {
            Malformation::Phone => {
                record.phone_us.retain(|c| c.is_ascii_digit());
            }
            Malformation::Email => {
                record.email_work = record.email_work.replace('@', "_at_");
            }
            Malformation::Date => {
                record.last_login = generated_at + Duration::days(365);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{AccountStatus, Department, MonthlyRevenue, SubscriptionTier};
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use uuid::Uuid;

    fn sample_record(generated_at: DateTime<Utc>) -> Record {
        Record {
            id: Uuid::nil(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email_work: "jane.doe@acme.com".to_string(),
            email_personal: "jane.doe@gmail.com".to_string(),
            phone_us: "(555) 123-4567".to_string(),
            job_title: "Field Engineer".to_string(),
            department: Department::Engineering,
            company_name: "Acme".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip_code: "62701".to_string(),
            country: "USA".to_string(),
            ip_address: "10.1.2.3".to_string(),
            last_login: generated_at - Duration::days(3),
            subscription_tier: SubscriptionTier::Gold,
            mrr: MonthlyRevenue::try_from(99.50).unwrap(),
            account_status: AccountStatus::Active,
            notes: "Renewal due next quarter.".to_string(),
            tags: "priority;expansion".to_string(),
        }
    }

    #[test]
    fn test_phone_malformation_strips_separators() {
        let generated_at = Utc.with_ymd_and_hms(2026, 1, 15, 8, 30, 0).unwrap();
        let mut record = sample_record(generated_at);
        Malformation::Phone.apply(&mut record, generated_at);
        assert_eq!(record.phone_us, "5551234567");
        // Only the phone changed.
        assert_eq!(record.email_work, "jane.doe@acme.com");
        assert_eq!(record.last_login, generated_at - Duration::days(3));
    }

    #[test]
    fn test_email_malformation_breaks_separator() {
        let generated_at = Utc.with_ymd_and_hms(2026, 1, 15, 8, 30, 0).unwrap();
        let mut record = sample_record(generated_at);
        Malformation::Email.apply(&mut record, generated_at);
        assert_eq!(record.email_work, "jane.doe_at_acme.com");
        // The personal address stays parseable.
        assert_eq!(record.email_personal, "jane.doe@gmail.com");
    }

    #[test]
    fn test_date_malformation_is_a_year_ahead() {
        let generated_at = Utc.with_ymd_and_hms(2026, 1, 15, 8, 30, 0).unwrap();
        let mut record = sample_record(generated_at);
        Malformation::Date.apply(&mut record, generated_at);
        assert_eq!(record.last_login, generated_at + Duration::days(365));
    }

    #[test]
    fn test_draw_respects_rate_extremes() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..500 {
            assert!(Malformation::draw(&mut rng, 0.0).is_none());
            assert!(Malformation::draw(&mut rng, 1.0).is_some());
        }
    }

    #[test]
    fn test_draw_reaches_every_mode() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut seen = [false; 3];
        for _ in 0..500 {
            match Malformation::draw(&mut rng, 1.0) {
                Some(Malformation::Phone) => seen[0] = true,
                Some(Malformation::Email) => seen[1] = true,
                Some(Malformation::Date) => seen[2] = true,
                None => unreachable!(),
            }
        }
        assert_eq!(seen, [true, true, true]);
    }
}

//! Name availability checking against Riot's cleanup policy.
//!
//! A summoner name is released some time after the account's last recorded
//! activity; the delay grows with the account's level. The checker resolves
//! the last activity across LoL and TFT match history, applies the policy
//! and reports the verdict as a human-readable status line.

use chrono::{DateTime, Months, TimeDelta, Utc};

use crate::error::AppError;
use crate::riot::client::RiotClient;
use crate::riot::region::Platform;
use crate::riot::types::SummonerDto;

const MIN_NAME_LENGTH: usize = 3;
const MAX_NAME_LENGTH: usize = 16;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// How the last-activity timestamp of an account is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupMode {
    /// Walk the LoL and TFT match history, falling back to champion
    /// masteries when the account has no LoL matches.
    #[default]
    MatchHistory,
    /// Trust the summoner record's own last-modification timestamp.
    /// One request instead of up to four, at the price of counting
    /// non-game activity (e.g. a level-up rollover) as activity.
    RevisionDate,
}

/// Checks whether a summoner name is available for reuse.
///
/// Immutable after construction; one instance can serve any number of
/// independent checks.
pub struct NameChecker {
    client: RiotClient,
    mode: LookupMode,
}

impl NameChecker {
    /// Create a checker for the given region code (case-insensitive, e.g.
    /// "euw", "na", "kr"). No network traffic happens here.
    pub fn new(api_key: String, region_code: &str) -> Result<Self, AppError> {
        let platform: Platform = region_code.parse()?;

        Ok(Self {
            client: RiotClient::new(api_key, platform),
            mode: LookupMode::default(),
        })
    }

    /// Create a checker that talks to explicit platform and regional hosts
    /// instead of the well-known Riot routing hosts.
    pub fn with_base_urls(api_key: String, platform_url: String, region_url: String) -> Self {
        Self {
            client: RiotClient::with_base_urls(api_key, platform_url, region_url),
            mode: LookupMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: LookupMode) -> Self {
        self.mode = mode;
        self
    }

    /// Check a candidate name and report its availability as a status line.
    ///
    /// Upstream 404 (no such account), 403 (bad credential) and 429 (rate
    /// limited) become user-facing messages; any other failure is returned
    /// as an error.
    pub async fn check_name(&self, name: &str) -> Result<String, AppError> {
        let length = name.chars().count();
        if !(MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&length) {
            return Ok(format!(
                "The name must have {MIN_NAME_LENGTH} to {MAX_NAME_LENGTH} characters"
            ));
        }

        let available_at = match self.availability_datetime(name).await {
            Ok(datetime) => datetime,
            Err(AppError::RiotApi { status: 404, .. }) => {
                return Ok("The name is available for new/existent accounts!".into());
            }
            Err(AppError::RiotApi { status: 403, .. }) => {
                return Ok("Invalid or expired key".into());
            }
            Err(AppError::RiotApi { status: 429, .. }) => {
                return Ok("Exceeded number of requests".into());
            }
            Err(err) => return Err(err),
        };

        let now = Utc::now();
        if available_at > now {
            Ok(format!(
                "The name will be available at: {}. Exactly {} from now!",
                available_at.format(DATETIME_FORMAT),
                format_remaining(available_at - now)
            ))
        } else {
            Ok("The name is available for existent accounts!".into())
        }
    }

    /// Moment at which the account currently holding `name` loses its claim
    /// on it.
    pub async fn availability_datetime(&self, name: &str) -> Result<DateTime<Utc>, AppError> {
        let summoner = self.client.get_summoner_by_name(name).await?;
        tracing::debug!(level = summoner.summoner_level, "summoner found");

        let last_activity = match self.mode {
            LookupMode::MatchHistory => self.last_activity_timestamp(&summoner).await?,
            LookupMode::RevisionDate => summoner.revision_date,
        };

        cleanup_datetime(last_activity, summoner.summoner_level)
    }

    /// Most recent recorded activity across LoL and TFT, in epoch ms.
    async fn last_activity_timestamp(&self, summoner: &SummonerDto) -> Result<i64, AppError> {
        let lol = self.last_lol_match_timestamp(summoner).await?;
        let tft = self.last_tft_match_timestamp(&summoner.puuid).await?;

        Ok(lol.max(tft))
    }

    async fn last_lol_match_timestamp(&self, summoner: &SummonerDto) -> Result<i64, AppError> {
        match self.client.get_last_match_id(&summoner.puuid).await? {
            Some(match_id) => {
                let game = self.client.get_match(&match_id).await?;
                Ok(game.info.end_timestamp())
            }
            // No LoL match history at all; champion masteries still record
            // when each champion was last played.
            None => self.last_played_champion_timestamp(&summoner.id).await,
        }
    }

    /// Zero when the account has no masteries either ("never played").
    async fn last_played_champion_timestamp(&self, summoner_id: &str) -> Result<i64, AppError> {
        let masteries = self.client.get_champion_masteries(summoner_id).await?;

        Ok(masteries
            .iter()
            .map(|mastery| mastery.last_play_time)
            .max()
            .unwrap_or(0))
    }

    // An account with no TFT matches contributes timestamp zero; only the
    // LoL side falls back to masteries.
    async fn last_tft_match_timestamp(&self, puuid: &str) -> Result<i64, AppError> {
        match self.client.get_last_tft_match_id(puuid).await? {
            Some(match_id) => Ok(self.client.get_tft_match(&match_id).await?.info.game_datetime),
            None => Ok(0),
        }
    }
}

/// Grace period in months granted after the last activity: 30 months from
/// level 30 up, 6 months up to level 6, one month per level in between.
fn grace_months(level: i64) -> u32 {
    level.clamp(6, 30) as u32
}

/// Name cleanup moment: last activity plus the level-dependent grace period,
/// added in calendar months (same day-of-month, clamped at month end).
fn cleanup_datetime(last_activity_ms: i64, level: i64) -> Result<DateTime<Utc>, AppError> {
    let activity = DateTime::from_timestamp_millis(last_activity_ms)
        .ok_or(AppError::InvalidTimestamp(last_activity_ms))?;

    activity
        .checked_add_months(Months::new(grace_months(level)))
        .ok_or(AppError::InvalidTimestamp(last_activity_ms))
}

fn format_remaining(remaining: TimeDelta) -> String {
    let days = remaining.num_days();
    let hours = remaining.num_hours() % 24;
    let minutes = remaining.num_minutes() % 60;
    let seconds = remaining.num_seconds() % 60;

    format!("{days} days, {hours:02}:{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn epoch_ms(year: i32, month: u32, day: u32) -> i64 {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc()
            .timestamp_millis()
    }

    fn date_of(datetime: DateTime<Utc>) -> (i32, u32, u32) {
        use chrono::Datelike;
        (datetime.year(), datetime.month(), datetime.day())
    }

    #[test]
    fn grace_months_clamps_at_both_ends() {
        assert_eq!(grace_months(0), 6);
        assert_eq!(grace_months(5), 6);
        assert_eq!(grace_months(6), 6);
        assert_eq!(grace_months(7), 7);
        assert_eq!(grace_months(29), 29);
        assert_eq!(grace_months(30), 30);
        assert_eq!(grace_months(500), 30);
    }

    #[test]
    fn cleanup_is_monotonic_in_level() {
        let activity = epoch_ms(2021, 3, 14);

        let mut previous = cleanup_datetime(activity, 1).unwrap();
        for level in 2..=40 {
            let current = cleanup_datetime(activity, level).unwrap();
            assert!(current >= previous, "regressed at level {level}");
            previous = current;
        }

        assert_eq!(
            cleanup_datetime(activity, 45).unwrap(),
            cleanup_datetime(activity, 30).unwrap()
        );
        assert_eq!(
            cleanup_datetime(activity, 1).unwrap(),
            cleanup_datetime(activity, 6).unwrap()
        );
    }

    #[test]
    fn cleanup_adds_calendar_months() {
        // Level 35 caps at 30 months: 2020-01-15 -> 2022-07-15.
        let release = cleanup_datetime(epoch_ms(2020, 1, 15), 35).unwrap();
        assert_eq!(date_of(release), (2022, 7, 15));

        // Level 10 grants 10 months: 2021-02-28 -> 2021-12-28.
        let release = cleanup_datetime(epoch_ms(2021, 2, 28), 10).unwrap();
        assert_eq!(date_of(release), (2021, 12, 28));
    }

    #[test]
    fn cleanup_clamps_at_month_end() {
        // 2023-08-31 + 6 months lands in leap February: 2024-02-29.
        let release = cleanup_datetime(epoch_ms(2023, 8, 31), 3).unwrap();
        assert_eq!(date_of(release), (2024, 2, 29));

        // 2020-08-31 + 6 months lands in plain February: 2021-02-28.
        let release = cleanup_datetime(epoch_ms(2020, 8, 31), 3).unwrap();
        assert_eq!(date_of(release), (2021, 2, 28));

        // 2022-10-31 + 6 months: April has no 31st.
        let release = cleanup_datetime(epoch_ms(2022, 10, 31), 3).unwrap();
        assert_eq!(date_of(release), (2023, 4, 30));
    }

    #[test]
    fn cleanup_preserves_time_of_day() {
        let activity = NaiveDate::from_ymd_opt(2021, 6, 1)
            .unwrap()
            .and_hms_opt(13, 37, 42)
            .unwrap()
            .and_utc()
            .timestamp_millis();

        let release = cleanup_datetime(activity, 12).unwrap();
        assert_eq!(
            release.format(DATETIME_FORMAT).to_string(),
            "2022-06-01 13:37:42"
        );
    }

    #[test]
    fn cleanup_rejects_out_of_range_timestamps() {
        match cleanup_datetime(i64::MAX, 10) {
            Err(AppError::InvalidTimestamp(ms)) => assert_eq!(ms, i64::MAX),
            other => panic!("expected InvalidTimestamp, got {other:?}"),
        }
    }

    #[test]
    fn format_remaining_breaks_down_days_and_time() {
        let delta = TimeDelta::days(152) + TimeDelta::seconds(6 * 3600 + 40 * 60 + 12);
        assert_eq!(format_remaining(delta), "152 days, 06:40:12");

        assert_eq!(format_remaining(TimeDelta::zero()), "0 days, 00:00:00");
    }

    #[tokio::test]
    async fn short_and_long_names_never_touch_the_network() {
        // An unroutable host: any request attempt would error out, so a
        // clean verdict proves none was made.
        let checker = NameChecker::with_base_urls(
            "key".into(),
            "http://127.0.0.1:9".into(),
            "http://127.0.0.1:9".into(),
        );

        for name in ["", "ab", "abcdefghijklmnopq"] {
            let verdict = checker.check_name(name).await.unwrap();
            assert_eq!(verdict, "The name must have 3 to 16 characters");
        }
    }
}

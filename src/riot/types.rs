use serde::Deserialize;

// ============================================================================
// Summoner-v4
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerDto {
    /// Encrypted summoner ID, key for Champion-Mastery-V4.
    pub id: String,
    /// Encrypted player UUID, key for the match history APIs.
    pub puuid: String,
    pub summoner_level: i64,
    /// Last modification of the summoner record, in epoch milliseconds.
    pub revision_date: i64,
}

// ============================================================================
// Match-v5
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDto {
    pub info: MatchInfoDto,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfoDto {
    pub game_start_timestamp: i64,
    pub game_duration: i64,
    pub game_end_timestamp: Option<i64>,
}

impl MatchInfoDto {
    /// Moment the game ended, in epoch milliseconds. Match records predating
    /// patch 11.20 lack `gameEndTimestamp`; the end is then start + duration.
    pub fn end_timestamp(&self) -> i64 {
        self.game_end_timestamp
            .unwrap_or(self.game_start_timestamp + self.game_duration)
    }
}

// ============================================================================
// Tft-Match-v1 (snake_case on the wire, unlike the LoL APIs)
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct TftMatchDto {
    pub info: TftMatchInfoDto,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TftMatchInfoDto {
    /// Start of the game, in epoch milliseconds.
    pub game_datetime: i64,
}

// ============================================================================
// Champion-Mastery-v4
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionMasteryDto {
    pub champion_id: i64,
    /// Last time the champion was played, in epoch milliseconds.
    pub last_play_time: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_end_prefers_explicit_timestamp() {
        let info = MatchInfoDto {
            game_start_timestamp: 1_000,
            game_duration: 500,
            game_end_timestamp: Some(2_000),
        };
        assert_eq!(info.end_timestamp(), 2_000);
    }

    #[test]
    fn match_end_derived_when_absent() {
        let info = MatchInfoDto {
            game_start_timestamp: 1_000,
            game_duration: 500,
            game_end_timestamp: None,
        };
        assert_eq!(info.end_timestamp(), 1_500);
    }

    #[test]
    fn summoner_decodes_camel_case() {
        let summoner: SummonerDto = serde_json::from_str(
            r#"{
                "id": "enc-id",
                "puuid": "enc-puuid",
                "summonerLevel": 42,
                "revisionDate": 1673740800000,
                "profileIconId": 10
            }"#,
        )
        .unwrap();

        assert_eq!(summoner.id, "enc-id");
        assert_eq!(summoner.summoner_level, 42);
        assert_eq!(summoner.revision_date, 1_673_740_800_000);
    }

    #[test]
    fn match_decodes_missing_end_timestamp() {
        let game: MatchDto = serde_json::from_str(
            r#"{"info": {"gameStartTimestamp": 1600000000000, "gameDuration": 1800}}"#,
        )
        .unwrap();

        assert_eq!(game.info.game_end_timestamp, None);
        assert_eq!(game.info.end_timestamp(), 1_600_000_001_800);
    }

    #[test]
    fn tft_match_decodes_snake_case() {
        let game: TftMatchDto =
            serde_json::from_str(r#"{"info": {"game_datetime": 1650000000000}}"#).unwrap();

        assert_eq!(game.info.game_datetime, 1_650_000_000_000);
    }
}

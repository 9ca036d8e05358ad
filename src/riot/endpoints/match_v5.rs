use crate::error::AppError;
use crate::riot::client::RiotClient;
use crate::riot::types::MatchDto;

impl RiotClient {
    /// Get the most recent match ID by PUUID, if any
    /// Uses regional routing (americas, europe, asia, sea)
    pub async fn get_last_match_id(&self, puuid: &str) -> Result<Option<String>, AppError> {
        let url = format!(
            "{}/lol/match/v5/matches/by-puuid/{}/ids?start=0&count=1",
            self.region_url(),
            puuid
        );

        let ids: Vec<String> = self.get(&url).await?;
        Ok(ids.first().cloned())
    }

    /// Get match details by match ID
    /// Uses regional routing (americas, europe, asia, sea)
    pub async fn get_match(&self, match_id: &str) -> Result<MatchDto, AppError> {
        let url = format!("{}/lol/match/v5/matches/{}", self.region_url(), match_id);

        self.get(&url).await
    }
}

use crate::error::AppError;
use crate::riot::client::RiotClient;
use crate::riot::types::ChampionMasteryDto;

impl RiotClient {
    /// Get all champion masteries by encrypted summoner ID
    /// Uses platform routing (br1, euw1, na1, ...)
    pub async fn get_champion_masteries(
        &self,
        summoner_id: &str,
    ) -> Result<Vec<ChampionMasteryDto>, AppError> {
        let url = format!(
            "{}/lol/champion-mastery/v4/champion-masteries/by-summoner/{}",
            self.platform_url(),
            summoner_id
        );

        self.get(&url).await
    }
}

use crate::error::AppError;
use crate::riot::client::RiotClient;
use crate::riot::types::SummonerDto;

impl RiotClient {
    /// Get summoner by name
    /// Uses platform routing (br1, euw1, na1, ...)
    pub async fn get_summoner_by_name(&self, name: &str) -> Result<SummonerDto, AppError> {
        let url = format!(
            "{}/lol/summoner/v4/summoners/by-name/{}",
            self.platform_url(),
            urlencoding::encode(name)
        );

        self.get(&url).await
    }
}

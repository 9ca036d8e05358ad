mod mastery;
mod match_v5;
mod summoner;
mod tft_match;

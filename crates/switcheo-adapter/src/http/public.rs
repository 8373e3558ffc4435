/*
[INPUT]:  Trading pairs, time ranges and address filters
[OUTPUT]: Exchange state and market data (tokens, contracts, candles, offers, trades)
[POS]:    HTTP layer - public endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use serde_json::Value;

use crate::http::{ClientConfig, HttpClient, Result, SwitcheoError};
use crate::types::{
    Blockchain, CandleInterval, Candlestick, Contracts, ExchangeStatus, ExchangeTime, FilledTrade,
    LastPrices, Offer, PairBase, Ticker24h, TokenList,
};

/// Contract version whose hash is attached to market data queries
pub const CONTRACT_VERSION: &str = "V2";
/// Trade count the API returns when no limit is sent
pub const DEFAULT_TRADES_LIMIT: u32 = 5000;
pub const MAX_TRADES_LIMIT: u32 = 10_000;

/// Client for the exchange's public market data endpoints
#[derive(Debug, Clone)]
pub struct PublicClient {
    http: HttpClient,
    blockchain: Blockchain,
}

impl PublicClient {
    /// Create a NEO client against the testnet
    pub fn new() -> Result<Self> {
        Self::with_config(Blockchain::default(), ClientConfig::default())
    }

    pub fn with_config(blockchain: Blockchain, config: ClientConfig) -> Result<Self> {
        Ok(Self::from_http(HttpClient::with_config(config)?, blockchain))
    }

    pub fn from_http(http: HttpClient, blockchain: Blockchain) -> Self {
        Self { http, blockchain }
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    pub fn blockchain(&self) -> Blockchain {
        self.blockchain
    }

    /// GET /exchange/status
    pub async fn get_exchange_status(&self) -> Result<ExchangeStatus> {
        self.http.get_json("/exchange/status", &[]).await
    }

    /// GET /exchange/timestamp
    pub async fn get_exchange_time(&self) -> Result<ExchangeTime> {
        self.http.get_json("/exchange/timestamp", &[]).await
    }

    /// GET /exchange/tokens
    pub async fn get_token_details(&self) -> Result<TokenList> {
        self.http.get_json("/exchange/tokens", &[]).await
    }

    /// GET /contracts
    pub async fn get_contracts(&self) -> Result<Contracts> {
        self.http.get_json("/contracts", &[]).await
    }

    /// Current trading contract hash for the configured blockchain
    pub async fn contract_hash(&self) -> Result<String> {
        let contracts = self.get_contracts().await?;
        let key = self.blockchain.contract_key();
        contracts
            .get(key)
            .and_then(|versions| versions.get(CONTRACT_VERSION))
            .cloned()
            .ok_or_else(|| {
                SwitcheoError::InvalidResponse(format!(
                    "no {key} {CONTRACT_VERSION} contract in /contracts"
                ))
            })
    }

    /// GET /tickers/candlesticks?pair=..&interval=..&start_time=..&end_time=..&contract_hash=..
    ///
    /// `start_time` and `end_time` are epoch seconds.
    pub async fn get_candlesticks(
        &self,
        pair: &str,
        start_time: i64,
        end_time: i64,
        interval: CandleInterval,
    ) -> Result<Vec<Candlestick>> {
        let contract_hash = self.contract_hash().await?;
        let params = [
            ("pair", pair.to_string()),
            ("interval", interval.minutes().to_string()),
            ("start_time", start_time.to_string()),
            ("end_time", end_time.to_string()),
            ("contract_hash", contract_hash),
        ];
        self.http.get_json("/tickers/candlesticks", &params).await
    }

    /// GET /tickers/last_24_hours
    pub async fn get_last_24_hours(&self) -> Result<Vec<Ticker24h>> {
        self.http.get_json("/tickers/last_24_hours", &[]).await
    }

    /// GET /tickers/last_price
    pub async fn get_last_price(&self) -> Result<LastPrices> {
        self.http.get_json("/tickers/last_price", &[]).await
    }

    /// GET /offers?blockchain=..&pair=..&contract_hash=..
    pub async fn get_offers(&self, pair: &str) -> Result<Vec<Offer>> {
        let contract_hash = self.contract_hash().await?;
        let params = [
            ("blockchain", self.blockchain.as_str().to_string()),
            ("pair", pair.to_string()),
            ("contract_hash", contract_hash),
        ];
        self.http.get_json("/offers", &params).await
    }

    /// GET /trades?blockchain=..&pair=..&contract_hash=..[&from=..][&to=..][&limit=..]
    ///
    /// `limit` must be within `1..=10000`; it is only sent when it differs
    /// from the server default of 5000.
    pub async fn get_trades(
        &self,
        pair: &str,
        start_time: Option<i64>,
        end_time: Option<i64>,
        limit: u32,
    ) -> Result<Vec<FilledTrade>> {
        if !(1..=MAX_TRADES_LIMIT).contains(&limit) {
            return Err(SwitcheoError::InvalidParameter(format!(
                "trade limit {limit} outside 1..={MAX_TRADES_LIMIT}"
            )));
        }

        let contract_hash = self.contract_hash().await?;
        let mut params = vec![
            ("blockchain", self.blockchain.as_str().to_string()),
            ("pair", pair.to_string()),
            ("contract_hash", contract_hash),
        ];
        if let Some(from) = start_time {
            params.push(("from", from.to_string()));
        }
        if let Some(to) = end_time {
            params.push(("to", to.to_string()));
        }
        if limit != DEFAULT_TRADES_LIMIT {
            params.push(("limit", limit.to_string()));
        }

        self.http.get_json("/trades", &params).await
    }

    /// GET /pairs[?bases=..]
    pub async fn get_pairs(&self, base: Option<PairBase>) -> Result<Vec<String>> {
        match base {
            Some(base) => {
                self.http
                    .get_json("/pairs", &[("bases", base.as_str().to_string())])
                    .await
            }
            None => self.http.get_json("/pairs", &[]).await,
        }
    }

    /// GET /orders?address=..&contract_hash=..[&pair=..]
    ///
    /// `address` is the script hash of the wallet.
    pub async fn get_orders(&self, address: &str, pair: Option<&str>) -> Result<Value> {
        let contract_hash = self.contract_hash().await?;
        let mut params = vec![
            ("address", address.to_string()),
            ("contract_hash", contract_hash),
        ];
        if let Some(pair) = pair {
            params.push(("pair", pair.to_string()));
        }
        self.http.get("/orders", &params).await
    }

    /// GET /balances?addresses[]=..&contract_hashes[]=..
    pub async fn get_balance(&self, addresses: &[&str], contracts: &[&str]) -> Result<Value> {
        let params: Vec<(&str, String)> = addresses
            .iter()
            .map(|address| ("addresses[]", address.to_string()))
            .chain(
                contracts
                    .iter()
                    .map(|contract| ("contract_hashes[]", contract.to_string())),
            )
            .collect();
        self.http.get("/balances", &params).await
    }
}

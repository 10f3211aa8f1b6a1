use crate::domain::port::LogLevel;
use crate::domain::service::{PriceTable, DEFAULT_ADULT_PRICE, DEFAULT_CHILD_PRICE};
use std::env;
use std::str::FromStr;

/// サービスの設定を管理する構造体
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub adult_price: u32,
    pub child_price: u32,
    pub log_level: LogLevel,
}

/// 設定エラー
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

impl ServiceConfig {
    /// 環境変数から設定を読み取る
    /// 環境変数が設定されていない場合はデフォルト値を使用
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = parse_var("SERVER_PORT", 3000u16)?;
        let adult_price = parse_var("TICKET_PRICE_ADULT", DEFAULT_ADULT_PRICE)?;
        let child_price = parse_var("TICKET_PRICE_CHILD", DEFAULT_CHILD_PRICE)?;

        let log_level = match env::var("LOG_LEVEL") {
            Ok(value) => LogLevel::from_string(&value).ok_or_else(|| {
                ConfigError::InvalidValue(format!("Invalid LOG_LEVEL: {}", value))
            })?,
            Err(_) => LogLevel::Info,
        };

        Ok(Self {
            host,
            port,
            adult_price,
            child_price,
            log_level,
        })
    }

    /// 設定された価格表
    pub fn price_table(&self) -> PriceTable {
        PriceTable::new(self.adult_price, self.child_price)
    }

    /// 待ち受けアドレスを生成
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(value) => value
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidValue(format!("Invalid {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

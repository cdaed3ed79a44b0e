//! 서버 및 실행 환경 설정 관리 모듈
//!
//! 환경 변수에서 서버 바인딩, 워커 수, Rate Limiting 설정을 읽습니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며, 설정되지 않은 경우
    /// `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::parse(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다. 알 수 없는 값은 `Production`입니다.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트. 기본값: 8080 (`PORT`)
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소. 기본값: "0.0.0.0" (`HOST`)
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// HTTP 워커 스레드 수. 기본값: 4, 최소 1 (`WORKERS`)
    pub fn workers() -> usize {
        env::var("WORKERS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(4)
            .max(1)
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    ///
    /// ```bash
    /// # .env.dev
    /// RATE_LIMIT_PER_SECOND=20
    /// RATE_LIMIT_BURST_SIZE=40
    /// ```
    pub fn from_env() -> Self {
        let per_second = env::var("RATE_LIMIT_PER_SECOND")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<u64>()
            .unwrap_or_else(|e| {
                log::error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                100
            });

        let burst_size = env::var("RATE_LIMIT_BURST_SIZE")
            .unwrap_or_else(|_| "200".to_string())
            .parse::<u32>()
            .unwrap_or_else(|e| {
                log::error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                200
            });

        let config = RateLimitConfig {
            per_second,
            burst_size,
        };

        log::info!("Rate Limiting 설정 로드됨: {:?}", config);
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::parse("development"), Environment::Development);
        assert_eq!(Environment::parse("DEV"), Environment::Development);
        assert_eq!(Environment::parse("test"), Environment::Test);
        assert_eq!(Environment::parse("stage"), Environment::Staging);
        assert_eq!(Environment::parse("production"), Environment::Production);
        assert_eq!(Environment::parse("unknown"), Environment::Production);
    }

    #[test]
    fn test_environment_name_round_trip() {
        for env in [
            Environment::Development,
            Environment::Test,
            Environment::Staging,
            Environment::Production,
        ] {
            assert_eq!(Environment::parse(env.as_str()), env);
        }
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }

        if env::var("WORKERS").is_err() {
            assert_eq!(ServerConfig::workers(), 4);
        }
    }

    #[test]
    fn test_rate_limit_defaults() {
        if env::var("RATE_LIMIT_PER_SECOND").is_err() && env::var("RATE_LIMIT_BURST_SIZE").is_err() {
            assert_eq!(
                RateLimitConfig::from_env(),
                RateLimitConfig {
                    per_second: 100,
                    burst_size: 200
                }
            );
        }
    }
}

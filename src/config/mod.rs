//! # Configuration Module
//!
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//! `.env.<profile>` 파일은 바이너리 시작 시 `dotenv`로 로드됩니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export WORKERS="4"
//!
//! # 실행 환경 (development, test, staging, production)
//! export ENVIRONMENT="production"
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! ```

pub mod server_config;

pub use server_config::*;

//! Rehberlik Anket Analizi - 学校心理辅导系统问卷分析服务
//!
//! 基于 Actix Web 构建，对问卷发放的答卷做逐题统计与汇总。
//!
//! # 架构
//! - `analytics`: 纯计算的问卷分析引擎
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `middlewares`: 限流中间件
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod analytics;
pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;

//! XML 构建与写出
//!
//! - `element` - 元素树，负责转义和格式良好
//! - `pool_writer` - 题库文档的头尾和题目外层结构

pub mod element;
pub mod pool_writer;

pub use element::{Element, Node};
pub use pool_writer::PoolWriter;

//! 抽象层 trait 定义
//!
//! 平台层（终端、测试桩等）实现这些 trait，核心流程只依赖抽象。

mod page_surface;

pub use page_surface::PageSurface;

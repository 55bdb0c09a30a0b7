//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ MenuMsg   │               ▼               │   │
//！│  │   ┌─────────┐          │ BrowserMsg│          ┌──────────┐         │   │
//！│  │   │  View   │          │ Direction │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ 同步调用          │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │   sysapps-core    │           │
//！│                                           │                   │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘

//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁，
//! 按键先被翻译为 Message，Update 层再根据 Message 修改 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // AppMessage：主消息
//!         mod browser;        // BrowserMessage：手册浏览器子消息
//!         mod direction;      // Direction：上 / 下
//!         mod menu;           // MenuMessage：主菜单子消息
//!
//!
//!     主消息按当前页面携带子消息：
//!
//!         AppMessage::Menu(MenuMessage::Move(Direction::Down))
//!                 │
//!                 ▼
//!         update::menu::update(app, MenuMessage::Move(..))
//!                 │
//!                 ▼
//!         app.menu.move_by(Direction::Down.delta())      // +1
//!
//!     主菜单是顶层，MenuMessage::Back 只用于关闭状态弹窗；
//!     Exit 键在任何页面上都翻译为 AppMessage::Quit。
//!
//! 最后，Event 将消息传入 Update 层进行处理。
//!     —— 去往 src/update/mod.rs 吧
//!

mod app;
mod browser;
mod direction;
mod menu;

pub use app::AppMessage;
pub use browser::BrowserMessage;
pub use direction::Direction;
pub use menu::MenuMessage;

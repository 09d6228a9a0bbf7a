//! Подсистема Publish–Subscribe (pub/sub).
//!
//! Этот модуль реализует синхронную внутрипроцессную систему pub/sub с
//! фиксированным набором именованных каналов:
//!
//! - `station`: фабрика станций — построение набора каналов по списку
//!   имён и доступ к каналам.
//! - `channel`: канал с упорядоченным списком подписчиков и синхронной
//!   доставкой.
//! - `subscriber`: хэндл подписки для отписки и диагностики.
//! - `payload`: динамическая нагрузка нетипизированных каналов.
//! - `macros`: макрос `station!` — типизированная станция с проверкой
//!   отображения имя→тип на этапе компиляции.
//!
//! Публичный API переэкспортирует:
//! - `station::*`
//! - `channel::*`
//! - `subscriber::*`
//! - `payload::*`

pub mod channel;
mod macros;
pub mod payload;
pub mod station;
pub mod subscriber;

pub use channel::Channel;
pub use payload::Payload;
pub use station::Station;
pub use subscriber::Subscription;

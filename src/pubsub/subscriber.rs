use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc,
};

/// Сквозной счётчик идентификаторов подписок.
///
/// Идентификаторы уникальны на весь процесс, поэтому хэндл одного канала
/// никогда не совпадёт с записью другого: `unsubscribe` с чужим хэндлом
/// структурно не находит, что удалять.
static NEXT_SUBSCRIPTION_ID: AtomicU64 = AtomicU64::new(1);

pub(crate) fn next_subscription_id() -> u64 {
    NEXT_SUBSCRIPTION_ID.fetch_add(1, Ordering::Relaxed)
}

/// Хэндл одной зарегистрированной подписки.
///
/// Непрозрачен для вызывающего кода: единственное применение — передать
/// обратно в [`Channel::unsubscribe`](crate::Channel::unsubscribe).
/// Подписка принадлежит ровно одному каналу всю свою жизнь; имя канала
/// хранится только для диагностики.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    channel: Arc<str>,
    once: bool,
    active: Arc<AtomicBool>,
}

impl Subscription {
    pub(crate) fn new(id: u64, channel: Arc<str>, once: bool, active: Arc<AtomicBool>) -> Self {
        Self {
            id,
            channel,
            once,
            active,
        }
    }

    pub(crate) fn id(&self) -> u64 {
        self.id
    }

    /// Имя канала, на который оформлена подписка.
    pub fn channel_name(&self) -> &str {
        &self.channel
    }

    /// `true` для одноразовой подписки (см.
    /// [`Channel::subscribe_once`](crate::Channel::subscribe_once)).
    pub fn is_once(&self) -> bool {
        self.once
    }

    /// `true`, пока подписка числится на канале. Сбрасывается после
    /// `unsubscribe` или после первой доставки одноразовой подписки.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }
}

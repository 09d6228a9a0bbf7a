use std::{any::Any, fmt, sync::Arc};

/// Динамическая полезная нагрузка для нетипизированных каналов.
///
/// Канал без объявленного типа принимает любое значение — строку, число,
/// собственную структуру — или вовсе ничего. Значение передаётся
/// подписчикам как есть, без проверок; получатель сам решает, каким
/// типом его прочитать через [`downcast_ref`](Payload::downcast_ref).
#[derive(Clone, Default)]
pub struct Payload(Option<Arc<dyn Any + Send + Sync>>);

impl Payload {
    /// Пустая нагрузка — публикация без аргумента.
    pub fn empty() -> Self {
        Self(None)
    }

    /// Оборачивает произвольное значение.
    pub fn of<T: Any + Send + Sync>(value: T) -> Self {
        Self(Some(Arc::new(value)))
    }

    /// `true`, если нагрузка пустая.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Пытается прочитать нагрузку как значение типа `T`.
    ///
    /// Возвращает `None`, если нагрузка пустая или содержит другой тип.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.as_ref().and_then(|value| value.downcast_ref::<T>())
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(_) => f.write_str("Payload(<dyn Any>)"),
            None => f.write_str("Payload(empty)"),
        }
    }
}

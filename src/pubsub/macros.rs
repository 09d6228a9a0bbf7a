/// Объявляет станцию с отображением имя канала → тип нагрузки,
/// проверяемым на этапе компиляции.
///
/// Разворачивается в структуру с полем [`Channel<T>`](crate::Channel) на
/// каждый объявленный канал и конструктором `new()`. Контракт исходной
/// динамической станции здесь обеспечивает компилятор:
///
/// - повторное имя канала — ошибка компиляции (повторное поле
///   структуры), а не `DuplicateChannel` во время выполнения;
/// - обращение к необъявленному каналу — ошибка компиляции (нет такого
///   поля);
/// - `subscribe`/`publish` каждого канала принимают ровно объявленный
///   тип; канал с типом `()` публикует через
///   [`emit`](crate::Channel::emit) и слушает через
///   [`on`](crate::Channel::on).
///
/// Пример:
///
/// ```
/// use efir::station;
///
/// station! {
///     /// Каналы редактора.
///     pub struct EditorBus {
///         saved: String,
///         closed: (),
///     }
/// }
///
/// let bus = EditorBus::new();
///
/// let sub = bus.saved.subscribe(|path: &String| {
///     assert_eq!(path, "a.txt");
/// });
/// bus.saved.publish(&"a.txt".to_string());
/// bus.saved.unsubscribe(&sub);
///
/// bus.closed.on(|| {});
/// bus.closed.emit();
/// ```
#[macro_export]
macro_rules! station {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $(#[$channel_meta:meta])* $channel:ident : $payload:ty ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$channel_meta])*
                pub $channel: $crate::Channel<$payload>,
            )+
        }

        impl $name {
            /// Создаёт станцию с пустыми каналами.
            $vis fn new() -> Self {
                Self {
                    $( $channel: $crate::Channel::new(stringify!($channel)), )+
                }
            }
        }

        impl ::std::default::Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    station! {
        /// Тестовая станция с разными типами нагрузки.
        struct Bus {
            text: String,
            number: u32,
            pulse: (),
        }
    }

    /// Тест проверяет, что каждый канал носит объявленное имя.
    #[test]
    fn test_macro_channel_names() {
        let bus = Bus::new();
        assert_eq!(bus.text.name(), "text");
        assert_eq!(bus.number.name(), "number");
        assert_eq!(bus.pulse.name(), "pulse");
    }

    /// Тест проверяет типизированную доставку по каждому каналу.
    #[test]
    fn test_macro_typed_delivery() {
        let bus = Bus::default();
        let hits = Arc::new(AtomicUsize::new(0));

        let h = hits.clone();
        bus.text.subscribe(move |s: &String| {
            assert_eq!(s, "привет");
            h.fetch_add(1, Ordering::Relaxed);
        });
        let h = hits.clone();
        bus.number.subscribe(move |n: &u32| {
            assert_eq!(*n, 7);
            h.fetch_add(1, Ordering::Relaxed);
        });
        let h = hits.clone();
        bus.pulse.on(move || {
            h.fetch_add(1, Ordering::Relaxed);
        });

        bus.text.publish(&"привет".to_string());
        bus.number.publish(&7);
        bus.pulse.emit();

        assert_eq!(hits.load(Ordering::Relaxed), 3);
    }
}

//! Property-based tests для станции pub/sub.
//!
//! Эти тесты генерируют случайные списки имён каналов и случайные
//! последовательности подписок/отписок и проверяют инварианты станции:
//! атомарность конструирования и порядок доставки.

use std::{
    collections::HashSet,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use parking_lot::Mutex;
use proptest::prelude::*;

use efir::{Station, StationError};

/// Базовая настройка proptest - количество итераций.
const PROPTEST_CASES: u32 = 512;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: PROPTEST_CASES,
        ..ProptestConfig::default()
    })]

    /// Конструирование успешно тогда и только тогда, когда все имена
    /// уникальны; при ошибке это именно DuplicateChannel с первым
    /// повторившимся именем.
    #[test]
    fn construction_succeeds_iff_names_unique(
        names in prop::collection::vec("[a-c]{1,3}", 0..12)
    ) {
        let unique = names.iter().collect::<HashSet<_>>().len() == names.len();
        let result = Station::untyped(names.iter().map(String::as_str));

        prop_assert_eq!(result.is_ok(), unique);
        match result {
            Ok(station) => {
                prop_assert_eq!(station.len(), names.len());
                prop_assert_eq!(
                    station.channel_names().collect::<Vec<_>>(),
                    names.iter().map(String::as_str).collect::<Vec<_>>()
                );
            }
            Err(err) => {
                // первое имя, встреченное повторно при проходе слева направо
                let mut seen = HashSet::new();
                let dup = names
                    .iter()
                    .find(|n| !seen.insert(n.as_str()))
                    .cloned()
                    .unwrap_or_default();
                prop_assert_eq!(err, StationError::DuplicateChannel(dup));
            }
        }
    }

    /// Доставка идёт строго в порядке подписки и только оставшимся
    /// подписчикам, какое бы подмножество ни было отписано заранее.
    #[test]
    fn delivery_order_survives_unsubscription(
        total in 1usize..10,
        removed in prop::collection::hash_set(0usize..10, 0..10)
    ) {
        let station: Station = Station::untyped(["p"]).unwrap();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let subs: Vec<_> = (0..total)
            .map(|i| {
                let seen = seen.clone();
                station["p"].subscribe(move |_| seen.lock().push(i))
            })
            .collect();
        for i in &removed {
            if *i < total {
                station["p"].unsubscribe(&subs[*i]);
            }
        }

        station["p"].publish_empty();

        let expected: Vec<usize> = (0..total).filter(|i| !removed.contains(i)).collect();
        prop_assert_eq!(seen.lock().clone(), expected);
    }

    /// Одноразовая подписка срабатывает ровно один раз независимо от
    /// количества публикаций; обычная — на каждую публикацию.
    #[test]
    fn once_fires_exactly_once(publishes in 1usize..20) {
        let station: Station = Station::untyped(["p"]).unwrap();
        let once_hits = Arc::new(AtomicUsize::new(0));
        let plain_hits = Arc::new(AtomicUsize::new(0));

        let h = once_hits.clone();
        station["p"].on_once(move || {
            h.fetch_add(1, Ordering::Relaxed);
        });
        let h = plain_hits.clone();
        station["p"].on(move || {
            h.fetch_add(1, Ordering::Relaxed);
        });

        for _ in 0..publishes {
            station["p"].publish_empty();
        }

        prop_assert_eq!(once_hits.load(Ordering::Relaxed), 1);
        prop_assert_eq!(plain_hits.load(Ordering::Relaxed), publishes);
    }

    /// Нагрузка доходит до каждого подписчика без искажений.
    #[test]
    fn payload_forwarded_intact(value in any::<i64>(), subscribers in 1usize..8) {
        let station: Station = Station::untyped(["p"]).unwrap();
        let sum = Arc::new(Mutex::new(Vec::new()));

        for _ in 0..subscribers {
            let sum = sum.clone();
            station["p"].subscribe(move |p| {
                sum.lock().push(*p.downcast_ref::<i64>().unwrap());
            });
        }

        station["p"].publish_value(value);

        prop_assert_eq!(sum.lock().clone(), vec![value; subscribers]);
    }
}

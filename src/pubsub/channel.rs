use std::{
    any::Any,
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Arc,
    },
};

use parking_lot::Mutex;
use tracing::trace;

use super::{
    subscriber::{next_subscription_id, Subscription},
    Payload,
};

type Callback<P> = Arc<dyn Fn(&P) + Send + Sync>;

/// Запись подписчика внутри канала.
struct Entry<P> {
    id: u64,
    once: bool,
    /// Общий флаг с выданным хэндлом и со снимками идущих публикаций:
    /// снятая запись не вызывается, даже если снимок сделан раньше.
    active: Arc<AtomicBool>,
    callback: Callback<P>,
}

impl<P> Clone for Entry<P> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            once: self.once,
            active: self.active.clone(),
            callback: self.callback.clone(),
        }
    }
}

/// Одна именованная линия pub/sub с собственным упорядоченным списком
/// подписчиков.
///
/// Все операции синхронные. Доставка идёт в порядке подписки, строго
/// внутри вызова [`publish`](Channel::publish). Список подписчиков
/// защищён мьютексом, однако на время вызова колбэка мьютекс не
/// удерживается — колбэк может свободно подписываться, отписываться и
/// публиковать, в том числе повторно в этот же канал.
///
/// Имя канала хранится только для диагностики; поиском каналов по имени
/// занимается [`Station`](crate::Station).
pub struct Channel<P = Payload> {
    name: Arc<str>,
    subscribers: Mutex<Vec<Entry<P>>>,
    /// Общее количество вызовов `publish`.
    pub publish_count: AtomicUsize,
}

impl<P> Channel<P> {
    /// Создаёт пустой канал с данным именем.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            subscribers: Mutex::new(Vec::new()),
            publish_count: AtomicUsize::new(0),
        }
    }

    /// Имя, под которым канал зарегистрирован.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Текущее число подписчиков.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().len()
    }

    /// `true`, если подписчиков нет.
    pub fn is_empty(&self) -> bool {
        self.subscribers.lock().is_empty()
    }

    /// Регистрирует колбэк и возвращает хэндл подписки.
    ///
    /// Подписка добавляется в конец списка; верхней границы на число
    /// подписчиков нет. Колбэк, оформленный во время идущей публикации,
    /// получит только последующие публикации.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&P) + Send + Sync + 'static,
    {
        self.attach(Arc::new(callback), false)
    }

    /// То же, что [`subscribe`](Channel::subscribe), но подписка
    /// одноразовая: запись снимается сразу после возврата из первой
    /// доставки, до перехода к следующему подписчику.
    pub fn subscribe_once<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&P) + Send + Sync + 'static,
    {
        self.attach(Arc::new(callback), true)
    }

    /// Подписка колбэком без аргумента: нагрузка игнорируется.
    ///
    /// Такой подписчик допустим на канале с любым типом нагрузки.
    pub fn on<F>(&self, callback: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.subscribe(move |_| callback())
    }

    /// Одноразовый вариант [`on`](Channel::on).
    pub fn on_once<F>(&self, callback: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.subscribe_once(move |_| callback())
    }

    fn attach(&self, callback: Callback<P>, once: bool) -> Subscription {
        let id = next_subscription_id();
        let active = Arc::new(AtomicBool::new(true));
        self.subscribers.lock().push(Entry {
            id,
            once,
            active: active.clone(),
            callback,
        });
        trace!("Подписка id={} на канал '{}'", id, self.name);
        Subscription::new(id, self.name.clone(), once, active)
    }

    /// Снимает подписку, если она числится на этом канале.
    ///
    /// Совпадение ищется по идентичности хэндла, а не по эквивалентности
    /// колбэка. Отсутствующая, уже снятая или чужая подписка — молчаливый
    /// no-op. Снятие действует немедленно: ещё не посещённый в идущей
    /// публикации подписчик вызван не будет, уже посещённый не
    /// затрагивается.
    pub fn unsubscribe(&self, subscription: &Subscription) {
        let mut subscribers = self.subscribers.lock();
        if let Some(pos) = subscribers.iter().position(|e| e.id == subscription.id()) {
            let entry = subscribers.remove(pos);
            entry.active.store(false, Ordering::Release);
            trace!("Снята подписка id={} с канала '{}'", entry.id, self.name);
        }
    }

    /// Синхронно доставляет нагрузку всем текущим подписчикам в порядке
    /// подписки.
    ///
    /// В начале вызова делается снимок списка; непосредственно перед
    /// каждым вызовом запись перепроверяется на актуальность. Отсюда
    /// гарантии при повторном входе из колбэка:
    ///
    /// - подписанные во время публикации получат только следующие
    ///   публикации;
    /// - отписанные во время публикации, но ещё не посещённые, вызваны
    ///   не будут;
    /// - одноразовая запись снимается сразу после возврата её колбэка.
    ///
    /// Паника колбэка распространяется к публикующему и обрывает
    /// оставшиеся доставки этого вызова; список подписчиков при этом
    /// остаётся целым, канал — рабочим.
    pub fn publish(&self, payload: &P) {
        self.publish_count.fetch_add(1, Ordering::Relaxed);
        let snapshot: Vec<Entry<P>> = self.subscribers.lock().clone();
        trace!(
            "Публикация в канал '{}', подписчиков в снимке: {}",
            self.name,
            snapshot.len()
        );
        for entry in &snapshot {
            if !entry.active.load(Ordering::Acquire) {
                continue;
            }
            (entry.callback)(payload);
            if entry.once {
                entry.active.store(false, Ordering::Release);
                self.subscribers.lock().retain(|e| e.id != entry.id);
            }
        }
    }
}

impl Channel<()> {
    /// Публикация без нагрузки для каналов с пустым типом.
    pub fn emit(&self) {
        self.publish(&());
    }
}

impl Channel<Payload> {
    /// Публикует произвольное значение в нетипизированный канал.
    pub fn publish_value<T: Any + Send + Sync>(&self, value: T) {
        self.publish(&Payload::of(value));
    }

    /// Публикация без нагрузки в нетипизированный канал.
    pub fn publish_empty(&self) {
        self.publish(&Payload::empty());
    }
}

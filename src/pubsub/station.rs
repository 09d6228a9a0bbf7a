use std::{collections::HashMap, ops::Index, sync::Arc};

use tracing::debug;

use super::{Channel, Payload};
use crate::error::{StationError, StationResult};

/// Фиксированный набор именованных каналов, созданных вместе.
///
/// Станция строится один раз из списка имён; после этого набор каналов
/// неизменяем — добавить или удалить канал нельзя, канал не создаётся
/// при первом обращении. Каналы полностью независимы друг от друга.
///
/// Тип нагрузки `P` один на все каналы станции. Для нетипизированного
/// режима (любое значение в любом канале) есть
/// [`Station::untyped`]; для набора каналов с разными типами нагрузки —
/// макрос [`station!`](crate::station), где отображение имя→тип
/// проверяется на этапе компиляции.
///
/// ```
/// use efir::Station;
///
/// let station: Station = Station::untyped(["news", "jobs"]).unwrap();
///
/// let sub = station["news"].subscribe(|p| {
///     if let Some(text) = p.downcast_ref::<&str>() {
///         assert_eq!(*text, "on air");
///     }
/// });
/// station["news"].publish_value("on air");
/// station["news"].unsubscribe(&sub);
/// ```
pub struct Station<P = Payload> {
    channels: HashMap<Arc<str>, Channel<P>>,
    /// Имена в порядке, в котором их передали конструктору.
    order: Vec<Arc<str>>,
}

impl<P> Station<P> {
    /// Строит станцию по списку имён каналов.
    ///
    /// Имена проверяются в переданном порядке; повторное имя — ошибка
    /// [`StationError::DuplicateChannel`], и станция не создаётся вовсе
    /// (конструирование атомарно, частично заполненной станции не
    /// бывает).
    pub fn new<I, S>(names: I) -> StationResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut channels = HashMap::new();
        let mut order = Vec::new();
        for name in names {
            let name: Arc<str> = Arc::from(name.as_ref());
            if channels.contains_key(&name) {
                return Err(StationError::DuplicateChannel(name.to_string()));
            }
            order.push(name.clone());
            channels.insert(name.clone(), Channel::new(name));
        }
        debug!("Создана станция: {} каналов", order.len());
        Ok(Self { channels, order })
    }

    /// Канал по имени либо [`StationError::NoSuchChannel`].
    pub fn channel(&self, name: &str) -> StationResult<&Channel<P>> {
        self.channels
            .get(name)
            .ok_or_else(|| StationError::NoSuchChannel(name.to_string()))
    }

    /// Канал по имени либо `None`.
    pub fn get(&self, name: &str) -> Option<&Channel<P>> {
        self.channels.get(name)
    }

    /// `true`, если канал с таким именем зарегистрирован.
    pub fn contains(&self, name: &str) -> bool {
        self.channels.contains_key(name)
    }

    /// Число каналов станции.
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// `true`, если станция создана без каналов.
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Имена каналов в порядке объявления.
    pub fn channel_names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|name| &**name)
    }

    /// Каналы в порядке объявления.
    pub fn channels(&self) -> impl Iterator<Item = &Channel<P>> {
        self.order.iter().filter_map(|name| self.channels.get(&**name))
    }
}

impl Station {
    /// Нетипизированная станция: каждый канал принимает любое значение
    /// (или ничего), см. [`Payload`].
    pub fn untyped<I, S>(names: I) -> StationResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(names)
    }
}

/// Доступ вида `station["news"]`.
///
/// # Panics
///
/// Паникует с сообщением [`StationError::NoSuchChannel`], если канала с
/// таким именем нет; для безошибочного доступа есть
/// [`channel`](Station::channel) и [`get`](Station::get).
impl<P> Index<&str> for Station<P> {
    type Output = Channel<P>;

    fn index(&self, name: &str) -> &Self::Output {
        match self.get(name) {
            Some(channel) => channel,
            None => panic!("{}", StationError::NoSuchChannel(name.to_string())),
        }
    }
}

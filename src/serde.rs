use super::comparer::EqualityComparer;
use super::concurrent::{ConcurrentList, ConcurrentQueue, ConcurrentStack};
use super::list::List;
use super::queue::Queue;
use super::stack::Stack;

use serde::de::Deserialize;
use serde::ser::{Serialize, Serializer};
use serde::Deserializer;

impl<T, E> Serialize for List<T, E>
where
    T: Serialize,
    E: EqualityComparer<T>,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.as_slice())
    }
}

impl<'de, T, E> Deserialize<'de> for List<T, E>
where
    T: Deserialize<'de>,
    E: EqualityComparer<T> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let items = Vec::<T>::deserialize(deserializer)?;
        let mut list = List::with_comparer(E::default());
        list.extend(items);
        Ok(list)
    }
}

impl<T: Serialize> Serialize for Stack<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.as_slice())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Stack<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<T>::deserialize(deserializer).map(Stack::from_iter)
    }
}

impl<T: Serialize> Serialize for Queue<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.as_deque())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Queue<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<T>::deserialize(deserializer).map(Queue::from_iter)
    }
}

impl<T, E> Serialize for ConcurrentList<T, E>
where
    T: Serialize,
    E: EqualityComparer<T>,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let snapshot = self.lock_shared();
        serializer.collect_seq(snapshot.as_slice())
    }
}

impl<'de, T, E> Deserialize<'de> for ConcurrentList<T, E>
where
    T: Deserialize<'de>,
    E: EqualityComparer<T> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        List::<T, E>::deserialize(deserializer).map(ConcurrentList::from)
    }
}

impl<T: Serialize> Serialize for ConcurrentStack<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let snapshot = self.lock_shared();
        serializer.collect_seq(snapshot.as_slice())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ConcurrentStack<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Stack::<T>::deserialize(deserializer).map(ConcurrentStack::from)
    }
}

impl<T: Serialize> Serialize for ConcurrentQueue<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let snapshot = self.lock_shared();
        serializer.collect_seq(snapshot.as_deque())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ConcurrentQueue<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Queue::<T>::deserialize(deserializer).map(ConcurrentQueue::from)
    }
}

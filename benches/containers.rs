use criterion::{criterion_group, criterion_main, Criterion};
use lsq::{ConcurrentQueue, ConcurrentStack, List, Queue, Stack};

fn list_push_remove_at(c: &mut Criterion) {
    let mut list: List<usize> = List::new();
    let mut i: usize = 0;
    c.bench_function("List: push-remove_at", |b| {
        b.iter(|| {
            list.push(i);
            let r = list.remove_at(0);
            assert_eq!(r, Ok(i));
            i += 1;
        })
    });
}

fn list_index_of(c: &mut Criterion) {
    let list: List<usize> = (0..1024).collect();
    c.bench_function("List: index_of", |b| {
        b.iter(|| {
            let index = list.index_of(&1023);
            assert_eq!(index, Some(1023));
        })
    });
}

fn stack_push_pop(c: &mut Criterion) {
    let mut stack: Stack<usize> = Stack::new();
    let mut i: usize = 0;
    c.bench_function("Stack: push-pop", |b| {
        b.iter(|| {
            stack.push(i);
            let p = stack.pop();
            assert_eq!(p, Ok(i));
            i += 1;
        })
    });
}

fn queue_enqueue_dequeue(c: &mut Criterion) {
    let mut queue: Queue<usize> = Queue::new();
    let mut i: usize = 0;
    c.bench_function("Queue: enqueue-dequeue", |b| {
        b.iter(|| {
            queue.enqueue(i);
            let d = queue.dequeue();
            assert_eq!(d, Ok(i));
            i += 1;
        })
    });
}

fn concurrent_stack_push_pop(c: &mut Criterion) {
    let stack: ConcurrentStack<usize> = ConcurrentStack::new();
    let mut i: usize = 0;
    c.bench_function("ConcurrentStack: push-pop", |b| {
        b.iter(|| {
            stack.push(i);
            let p = stack.pop();
            assert_eq!(p, Ok(i));
            i += 1;
        })
    });
}

fn concurrent_queue_enqueue_dequeue(c: &mut Criterion) {
    let queue: ConcurrentQueue<usize> = ConcurrentQueue::new();
    let mut i: usize = 0;
    c.bench_function("ConcurrentQueue: enqueue-dequeue", |b| {
        b.iter(|| {
            queue.enqueue(i);
            let d = queue.dequeue();
            assert_eq!(d, Ok(i));
            i += 1;
        })
    });
}

criterion_group!(
    containers,
    list_push_remove_at,
    list_index_of,
    stack_push_pop,
    queue_enqueue_dequeue,
    concurrent_stack_push_pop,
    concurrent_queue_enqueue_dequeue
);
criterion_main!(containers);

use std::{
  sync::{
    Arc, Barrier,
    atomic::{AtomicBool, Ordering},
  },
  thread,
  time::Duration,
};

use cordon_guard_rs::{
  core::{concurrent::guarded::SpinGuarded, sync::ArcShared},
  std::StdGuarded,
};

#[test]
fn concurrent_readers_share_the_lock() {
  let guarded = ArcShared::new(StdGuarded::new(7_u32));
  let barrier = Arc::new(Barrier::new(4));
  let mut readers = Vec::new();
  for _ in 0..4 {
    let guarded = guarded.clone();
    let barrier = Arc::clone(&barrier);
    readers.push(thread::spawn(move || {
      guarded.read_access(|value| {
        // All four readers must hold the shared lock at once to get past this.
        barrier.wait();
        *value
      })
    }));
  }
  for reader in readers {
    assert_eq!(reader.join().expect("reader thread"), 7);
  }
}

#[test]
fn hundred_concurrent_writers_lose_no_updates() {
  let guarded = ArcShared::new(StdGuarded::new(0_u32));
  let mut writers = Vec::new();
  for _ in 0..100 {
    let guarded = guarded.clone();
    writers.push(thread::spawn(move || guarded.write_access(|value| *value += 1)));
  }
  for writer in writers {
    writer.join().expect("writer thread");
  }
  assert_eq!(guarded.read_access(|value| *value), 100);
}

#[test]
fn write_and_read_write_access_serialize() {
  let guarded = ArcShared::new(StdGuarded::new(0_u32));
  let in_critical = Arc::new(AtomicBool::new(false));
  let overlapped = Arc::new(AtomicBool::new(false));
  let mut workers = Vec::new();
  for index in 0..16 {
    let guarded = guarded.clone();
    let in_critical = Arc::clone(&in_critical);
    let overlapped = Arc::clone(&overlapped);
    workers.push(thread::spawn(move || {
      let body = |value: &mut u32| {
        if in_critical.swap(true, Ordering::SeqCst) {
          overlapped.store(true, Ordering::SeqCst);
        }
        *value += 1;
        thread::sleep(Duration::from_millis(1));
        in_critical.store(false, Ordering::SeqCst);
      };
      if index % 2 == 0 {
        guarded.write_access(body);
      } else {
        guarded.read_write_access(body);
      }
    }));
  }
  for worker in workers {
    worker.join().expect("worker thread");
  }
  assert!(!overlapped.load(Ordering::SeqCst));
  assert_eq!(guarded.read_access(|value| *value), 16);
}

#[test]
fn reader_never_observes_a_partial_write() {
  let guarded = ArcShared::new(StdGuarded::new((1_u64, 1_u64)));
  let writer = {
    let guarded = guarded.clone();
    thread::spawn(move || {
      guarded.write_access(|pair| {
        pair.0 = 2;
        thread::sleep(Duration::from_millis(5));
        pair.1 = 2;
      });
    })
  };
  let mut readers = Vec::new();
  for _ in 0..8 {
    let guarded = guarded.clone();
    readers.push(thread::spawn(move || {
      guarded.read_access(|pair| {
        assert_eq!(pair.0, pair.1);
      });
    }));
  }
  writer.join().expect("writer thread");
  for reader in readers {
    reader.join().expect("reader thread");
  }
}

#[test]
fn reader_observes_the_value_before_or_after_a_write() {
  let guarded = ArcShared::new(StdGuarded::new(String::from("A")));
  let writer = {
    let guarded = guarded.clone();
    thread::spawn(move || {
      guarded.write_access(|value| {
        thread::sleep(Duration::from_millis(10));
        *value = String::from("B");
      });
    })
  };
  let observed = guarded.read_access(String::clone);
  assert!(observed == "A" || observed == "B");
  writer.join().expect("writer thread");
}

#[test]
fn panicked_write_callback_releases_the_lock() {
  let guarded = ArcShared::new(StdGuarded::new(41_u32));
  let failed = {
    let guarded = guarded.clone();
    thread::spawn(move || {
      guarded.write_access(|_value| panic!("callback failure"));
    })
    .join()
  };
  assert!(failed.is_err());
  assert_eq!(guarded.read_access(|value| *value), 41);
  guarded.write_access(|value| *value += 1);
  assert_eq!(guarded.read_access(|value| *value), 42);
}

#[test]
fn panicked_read_callback_releases_the_lock() {
  let guarded = ArcShared::new(StdGuarded::new(5_u32));
  let failed = {
    let guarded = guarded.clone();
    thread::spawn(move || {
      guarded.read_access(|_value| panic!("callback failure"));
    })
    .join()
  };
  assert!(failed.is_err());
  guarded.write_access(|value| *value += 1);
  assert_eq!(guarded.read_access(|value| *value), 6);
}

#[test]
fn spin_backend_serializes_writers() {
  let guarded = ArcShared::new(SpinGuarded::new(0_u32));
  let mut writers = Vec::new();
  for _ in 0..8 {
    let guarded = guarded.clone();
    writers.push(thread::spawn(move || {
      for _ in 0..1_000 {
        guarded.write_access(|value| *value += 1);
      }
    }));
  }
  for writer in writers {
    writer.join().expect("writer thread");
  }
  assert_eq!(guarded.read_access(|value| *value), 8_000);
}

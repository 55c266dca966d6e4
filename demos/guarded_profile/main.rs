use std::thread;

use cordon_guard_rs::{core::sync::ArcShared, std::StdGuarded};

#[derive(Debug)]
struct ProfileState {
  display_name: String,
  visits:       u64,
}

/// Model object that routes every state access through the guard.
#[derive(Clone)]
struct Profile {
  state: ArcShared<StdGuarded<ProfileState>>,
}

impl Profile {
  fn new(display_name: &str) -> Self {
    let state = ProfileState { display_name: display_name.into(), visits: 0 };
    Self { state: ArcShared::new(StdGuarded::new(state)) }
  }

  fn display_name(&self) -> String {
    self.state.read_access(|state| state.display_name.clone())
  }

  fn visits(&self) -> u64 {
    self.state.read_access(|state| state.visits)
  }

  fn record_visit(&self) {
    self.state.write_access(|state| state.visits += 1);
  }

  fn rename(&self, display_name: &str) {
    self.state.read_write_access(|state| state.display_name = display_name.into());
  }
}

fn main() {
  let profile = Profile::new("anonymous");
  let mut workers = Vec::new();
  for index in 0..4 {
    let profile = profile.clone();
    workers.push(thread::spawn(move || {
      for _ in 0..1_000 {
        profile.record_visit();
      }
      if index == 0 {
        profile.rename("first-worker");
      }
    }));
  }
  for worker in workers {
    worker.join().expect("worker thread");
  }
  println!("{} received {} visits", profile.display_name(), profile.visits());
}

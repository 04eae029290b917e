use pprof_agent::dispatch::{Dispatcher, ProfileRequest};
use pprof_agent::output::write_profile;
use pprof_agent::profile::{Frame, Profile, ProfileKind, Sample};
use pprof_agent::sampler::{CpuSession, MemorySampler, Sampler, SnapshotDirSampler};
use pprof_agent::utils::error::{ProfileError, SamplerError};
use pprof_agent::views::ViewMode;
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;
use tempfile::tempdir;

fn block_profile() -> Profile {
    Profile::new(
        ProfileKind::Block,
        vec![Sample::new(
            vec![Frame::new("lock", 4), Frame::new("main", 1)],
            vec![3, 1_500_000],
        )],
    )
}

#[test]
fn test_snapshot_dir_render() {
    let dir = tempdir().unwrap();
    write_profile(&block_profile(), dir.path().join("block.json")).unwrap();

    let dispatcher = Dispatcher::new(SnapshotDirSampler::new(dir.path()));
    let text = dispatcher
        .render(&ProfileRequest::new("block").with_limit(100))
        .unwrap();

    assert_eq!(
        text,
        "Flat view (direct values) (showing top 100 locations)\n\n\
         lock:4: 3 contentions, 1.5ms delay\n"
    );
}

#[test]
fn test_snapshot_dir_missing_kind_is_not_found() {
    let dir = tempdir().unwrap();
    let dispatcher = Dispatcher::new(SnapshotDirSampler::new(dir.path()));

    let err = dispatcher.render(&ProfileRequest::new("heap")).unwrap_err();

    assert!(matches!(err, ProfileError::NotFound(ref kind) if kind == "heap"));
}

#[test]
fn test_snapshot_dir_garbage_is_parse_error() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("goroutine.json"), b"\x00\x01not json").unwrap();
    let dispatcher = Dispatcher::new(SnapshotDirSampler::new(dir.path()));

    let err = dispatcher.render(&ProfileRequest::new("goroutine")).unwrap_err();

    assert!(matches!(err, ProfileError::Parse { .. }));
    assert_eq!(err.kind(), "goroutine");
}

#[test]
fn test_unknown_profile_name_is_not_found() {
    let dispatcher = Dispatcher::new(MemorySampler::new());
    for name in ["mutex", "Heap", ""] {
        let err = dispatcher.render(&ProfileRequest::new(name)).unwrap_err();
        assert!(matches!(err, ProfileError::NotFound(_)), "{}", name);
    }
}

struct Gate {
    opened: Barrier,
    release: Barrier,
}

/// Holds the CPU window open until the gate is released
struct GatedSampler {
    inner: MemorySampler,
    session: CpuSession,
    gate: Arc<Gate>,
}

impl Sampler for GatedSampler {
    fn snapshot(&self, kind: ProfileKind) -> Result<Vec<u8>, SamplerError> {
        self.inner.snapshot(kind)
    }

    fn sample_cpu(&self, duration: Duration) -> Result<Vec<u8>, SamplerError> {
        let _window = self.session.try_begin()?;
        self.gate.opened.wait();
        self.gate.release.wait();
        self.inner.sample_cpu(duration)
    }
}

#[test]
fn test_concurrent_cpu_sampling_is_rejected() {
    let cpu = Profile::new(
        ProfileKind::Cpu,
        vec![Sample::new(vec![Frame::new("spin", 1)], vec![10_000_000])],
    );
    let gate = Arc::new(Gate {
        opened: Barrier::new(2),
        release: Barrier::new(2),
    });
    let dispatcher = Arc::new(Dispatcher::new(GatedSampler {
        inner: MemorySampler::new().without_wait().with_profile(cpu),
        session: CpuSession::new(),
        gate: Arc::clone(&gate),
    }));

    let first = {
        let dispatcher = Arc::clone(&dispatcher);
        thread::spawn(move || {
            dispatcher.render(
                &ProfileRequest::new("cpu")
                    .with_view(ViewMode::Flat)
                    .with_duration(Duration::from_secs(2)),
            )
        })
    };

    gate.opened.wait();
    let second = dispatcher.render(&ProfileRequest::new("cpu").with_duration(Duration::from_secs(1)));
    gate.release.wait();

    assert!(matches!(
        second,
        Err(ProfileError::Write {
            source: SamplerError::CpuSessionActive,
            ..
        })
    ));
    let text = first.join().unwrap().unwrap();
    assert!(text.contains("spin:1: 10ms CPU time"));
}

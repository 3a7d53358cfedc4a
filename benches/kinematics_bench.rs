//! Per-frame figure refresh benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stickpose::kinematics::WorldPose;
use stickpose::options::Options;
use stickpose::segments::LimbSegments;
use stickpose::skeleton::Skeleton;
use stickpose::{EulerDegrees, PoseData, PoseEngine};

fn posed_skeleton() -> Skeleton {
    let mut skeleton = Skeleton::build();
    skeleton.apply_rotation("torso", EulerDegrees::new(10.0, 25.0, 0.0));
    skeleton.apply_rotation("leftShoulder", EulerDegrees::new(0.0, 0.0, 80.0));
    skeleton.apply_rotation("rightKnee", EulerDegrees::new(-45.0, 0.0, 0.0));
    skeleton
}

fn forward_kinematics_benchmark(c: &mut Criterion) {
    let skeleton = posed_skeleton();
    let mut world = WorldPose::evaluate(&skeleton);
    let _ = c.bench_function("fk_recompute", |b| {
        b.iter(|| {
            world.recompute(black_box(&skeleton));
        });
    });
}

fn segment_update_benchmark(c: &mut Criterion) {
    let skeleton = posed_skeleton();
    let world = WorldPose::evaluate(&skeleton);
    let mut segments = LimbSegments::new();
    let _ = c.bench_function("limb_segments_update", |b| {
        b.iter(|| segments.update(black_box(&world)));
    });
}

fn pose_codec_benchmark(c: &mut Criterion) {
    let mut engine = PoseEngine::new((800, 600), Options::default());
    engine.import_pose(&{
        let mut pose = PoseData::new();
        pose.insert("neck", EulerDegrees::new(15.0, -5.0, 0.0));
        pose
    });
    let _ = c.bench_function("export_to_json", |b| {
        b.iter(|| black_box(engine.export_pose().to_pretty_json()))
    });
}

criterion_group!(
    benches,
    forward_kinematics_benchmark,
    segment_update_benchmark,
    pose_codec_benchmark
);
criterion_main!(benches);

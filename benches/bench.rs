// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use criterion::*;

use altaz2hadec::{
    alt_az_to_hour_angle_dec, alt_az_to_hour_angle_dec_array, alt_az_to_hour_angle_dec_broadcast,
    parse_angle, AngleValues,
};

fn conversions(c: &mut Criterion) {
    c.bench_function("alt_az_to_hour_angle_dec", |b| {
        b.iter(|| {
            alt_az_to_hour_angle_dec(
                black_box(59.086111),
                black_box(133.308056),
                black_box(43.07833),
            )
        })
    });

    let mut group = c.benchmark_group("alt_az_to_hour_angle_dec_array");
    for num_coords in [100, 10_000, 1_000_000] {
        let alt: Vec<f64> = (0..num_coords)
            .map(|i| (i as f64 / num_coords as f64) * 180.0 - 90.0)
            .collect();
        let az: Vec<f64> = (0..num_coords)
            .map(|i| (i as f64 * 7.3) % 360.0)
            .collect();
        let lat = vec![-26.703319; num_coords];
        group.throughput(Throughput::Elements(num_coords as u64));
        group.bench_with_input(
            BenchmarkId::new("arrays", num_coords),
            &num_coords,
            |b, _| b.iter(|| alt_az_to_hour_angle_dec_array(&alt[..], &az[..], &lat[..])),
        );
        group.bench_with_input(
            BenchmarkId::new("broadcast latitude", num_coords),
            &num_coords,
            |b, _| {
                b.iter(|| {
                    alt_az_to_hour_angle_dec_broadcast(
                        AngleValues::from(alt.as_slice()),
                        AngleValues::from(az.as_slice()),
                        AngleValues::Scalar(-26.703319),
                    )
                })
            },
        );
    }
    group.finish();
}

fn angle_parsing(c: &mut Criterion) {
    c.bench_function("parse_angle decimal", |b| {
        b.iter(|| parse_angle(black_box("59.086111")))
    });
    c.bench_function("parse_angle sexagesimal", |b| {
        b.iter(|| parse_angle(black_box("-26:42:11.95")))
    });
    c.bench_function("parse_angle radians", |b| {
        b.iter(|| parse_angle(black_box("1.0312rad")))
    });
}

criterion_group!(benches, conversions, angle_parsing);
criterion_main!(benches);

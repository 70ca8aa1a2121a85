//! Preprocessor throughput across the three stock backend profiles.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use glint::{preprocess_program, reflect_uniforms, DefineMap, ShaderFeatures, VendorInfo};

const VERT: &str = "uniform Matrices {
    mat4 u_ViewProj;
    mat4 u_Model;
    mat4 u_NormalMatrix;
};
attribute vec3 a_Pos;
attribute vec3 a_Normal;
attribute vec2 a_Uv;
varying vec2 v_Uv;
varying vec3 v_Normal;
void mainVS() {
    v_Uv = a_Uv;
    v_Normal = (u_NormalMatrix * vec4(a_Normal, 0.0)).xyz;
    gl_Position = u_ViewProj * u_Model * vec4(a_Pos, 1.0);
}
";

const FRAG: &str = "precision highp float;
uniform sampler2D u_Map;
uniform sampler2D u_Normal;
uniform Params {
    vec4 u_Tint;
    vec4 u_FogColor;
    float u_FogDensity;
};
varying vec2 v_Uv;
varying vec3 v_Normal;
vec4 fetch(PD_SAMPLER_2D(map), vec2 uv) {
    return texture(PU_SAMPLER_2D(map), uv);
}
void mainPS() {
    vec4 base = fetch(PP_SAMPLER_2D(u_Map), v_Uv);
    vec4 bump = texture(SAMPLER_2D(u_Normal), v_Uv);
    float shade = max(dot(normalize(v_Normal + bump.xyz), vec3(0.0, 1.0, 0.0)), 0.0);
    gl_FragColor = base * u_Tint * shade + u_FogColor * u_FogDensity;
}
";

fn bench_preprocess_program(c: &mut Criterion) {
    let mut defines = DefineMap::new();
    defines.set("USE_FOG", true);
    defines.set("MAX_LIGHTS", 4);

    let mut group = c.benchmark_group("preprocess_program");
    for (name, vendor) in [
        ("webgl1", VendorInfo::webgl1()),
        ("webgl2", VendorInfo::webgl2()),
        ("webgpu", VendorInfo::webgpu()),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                preprocess_program(
                    black_box(&vendor),
                    black_box(VERT),
                    black_box(FRAG),
                    black_box(&defines),
                    ShaderFeatures::MRT,
                )
                .unwrap()
            });
        });
    }
    group.finish();
}

fn bench_reflect_uniforms(c: &mut Criterion) {
    c.bench_function("reflect_uniforms", |b| {
        b.iter(|| reflect_uniforms(black_box(FRAG)));
    });
}

criterion_group!(benches, bench_preprocess_program, bench_reflect_uniforms);
criterion_main!(benches);

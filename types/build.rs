fn main() {
    println!("cargo:rerun-if-changed=proto/matrix.proto");
    tonic_prost_build::configure()
        .compile_protos(&["proto/matrix.proto"], &["proto/"])
        .expect("Failed to compile proto/matrix.proto");
}

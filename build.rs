fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Only rerun if proto files change
    println!("cargo:rerun-if-changed=proto/consignment/consignment.proto");
    println!("cargo:rerun-if-changed=proto/vessel/vessel.proto");

    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos(
            &[
                "proto/consignment/consignment.proto",
                "proto/vessel/vessel.proto",
            ],
            &["proto"],
        )?;
    Ok(())
}

use shadow_rs::ShadowBuilder;

fn main() {
    // Build metadata for `tenant-config --version`
    ShadowBuilder::builder()
        .build()
        .expect("Failed to generate build metadata");
}

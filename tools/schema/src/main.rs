use graphql::build_schema;
use services::AnalysisConfig;

fn main() -> std::io::Result<()> {
    let schema = build_schema(AnalysisConfig::default());
    // Print the schema in SDL format
    println!("{}", &schema.sdl());
    Ok(())
}

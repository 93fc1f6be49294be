pub mod args;
pub mod commands;

pub use args::GenerateArgs;
use clap::Parser;

const HELP_TEMPLATE: &str = "\
{name} {version}\n\
{about-with-newline}\n\
USAGE:\n    {usage}\n\
\n{all-args}\n\
{after-help}\n";

const AFTER_LONG_HELP: &str = "\
ENVIRONMENT:
    PARAMGEN_INPUT_YAML, PARAMGEN_OUTPUT_YAML, PARAMGEN_MINIFY, PARAMGEN_INDENT,
    PARAMGEN_OVERWRITE, PARAMGEN_PRUNE, PARAMGEN_VERBOSE override paramgen.toml;
    command line flags override both. PARAMGEN_LOG_FILE and PARAMGEN_LOG_CONSOLE
    override the [logging] section. RUST_LOG overrides the log level.

EXAMPLES:
    paramgen -f template.json
    paramgen -f template.yaml --inyaml -o params.json
    paramgen -f template.yaml --inyaml --outyaml -o params.yaml -r";

#[derive(Parser, Debug)]
#[command(name = "paramgen")]
#[command(version = crate::VERSION)]
#[command(about = "Generate a parameters file from the Parameters section of a template")]
#[command(help_template = HELP_TEMPLATE)]
#[command(
    long_about = "Reads the Parameters section of a JSON or YAML template and writes a list of ParameterKey/ParameterValue pairs. An existing parameters file is updated in place: new parameters are appended, existing values are kept."
)]
#[command(after_long_help = AFTER_LONG_HELP)]
pub struct Args {
    #[command(flatten)]
    pub generate: GenerateArgs,
}

pub fn run(args: Args) -> crate::Result<()> {
    commands::generate(args.generate)
}

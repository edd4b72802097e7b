#[cfg(not(feature = "binary"))]
compile_error!("To compile the array-translate binary, you must enable the `binary` feature flag");

use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process::exit,
};

use array_translate::{
    lex::{segments, SegmentKind},
    parse_lang, ConfigSource, Lang, TranslateConfig, TranslateError, TranslateResult, Translator,
};
use clap::Parser;
use colored::*;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "Error:".bright_red().bold());
        exit(1);
    }
}

fn run() -> TranslateResult {
    let translator = Translator::builtin();
    match App::parse() {
        App::Translate {
            path,
            output,
            langs,
            config_options,
        } => {
            let (from, to) = langs.parse()?;
            let config = config_options.config(path.as_deref())?;
            let code = read_input(path.as_deref())?;
            let translated = translator.translate_with(&code, from, to, &config);
            write_output(output.as_deref(), &translated)?;
        }
        App::Literals { path, output, langs } => {
            let (from, to) = langs.parse()?;
            let code = read_input(path.as_deref())?;
            let translated = translator.translate_array_literals(&code, from, to);
            write_output(output.as_deref(), &translated)?;
        }
        App::Prims { langs, json } => {
            let (from, to) = langs.parse()?;
            let prims = translator.translatable_primitives(from, to);
            if json {
                println!("{}", serde_json::to_string_pretty(&prims)?);
            } else if prims.is_empty() {
                println!("No primitives differ between {} and {}", from.name(), to.name());
            } else {
                let width = prims.iter().map(|p| p.concept.len()).max().unwrap_or(0);
                for prim in prims {
                    println!(
                        "{:width$}  {} → {}",
                        prim.concept.as_str(),
                        prim.from.as_str().bright_yellow(),
                        prim.to.as_str().bright_green()
                    );
                }
            }
        }
        App::Langs => {
            for lang in Lang::all() {
                let profile = lang.profile();
                println!(
                    "{:8} {:8} comments {:?}, separator {:?}, negative {:?}",
                    lang.id().bold(),
                    lang.name(),
                    profile.line_comments,
                    profile.separator,
                    profile.negative
                );
            }
        }
        App::Classify { path, lang } => {
            let lang = parse_lang(&lang)?;
            let code = read_input(path.as_deref())?;
            for seg in segments(lang, &code) {
                let text = &code[seg.range];
                match seg.kind {
                    SegmentKind::Code => print!("{text}"),
                    SegmentKind::String => print!("{}", text.bright_cyan()),
                    SegmentKind::Comment => print!("{}", text.bright_black()),
                }
            }
            io::stdout().flush().map_err(TranslateError::Stdout)?;
        }
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> TranslateResult<String> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|e| TranslateError::Read(path.into(), e)),
        None => {
            let mut code = String::new();
            io::stdin()
                .read_to_string(&mut code)
                .map_err(TranslateError::Stdin)?;
            Ok(code)
        }
    }
}

fn write_output(path: Option<&Path>, text: &str) -> TranslateResult {
    match path {
        Some(path) => fs::write(path, text).map_err(|e| TranslateError::Write(path.into(), e)),
        None => io::stdout()
            .write_all(text.as_bytes())
            .map_err(TranslateError::Stdout),
    }
}

#[derive(Parser)]
#[clap(version)]
enum App {
    #[clap(about = "Translate primitives and array literals")]
    Translate {
        #[clap(help = "The file to translate, or stdin if omitted")]
        path: Option<PathBuf>,
        #[clap(short, long, help = "The path to the output file")]
        output: Option<PathBuf>,
        #[clap(flatten)]
        langs: LangOptions,
        #[clap(flatten)]
        config_options: ConfigOptions,
    },
    #[clap(about = "Translate only array literals")]
    Literals {
        #[clap(help = "The file to translate, or stdin if omitted")]
        path: Option<PathBuf>,
        #[clap(short, long, help = "The path to the output file")]
        output: Option<PathBuf>,
        #[clap(flatten)]
        langs: LangOptions,
    },
    #[clap(about = "List the primitives that translate between two languages")]
    Prims {
        #[clap(flatten)]
        langs: LangOptions,
        #[clap(long, help = "Print the list as JSON")]
        json: bool,
    },
    #[clap(about = "List the supported languages")]
    Langs,
    #[clap(about = "Highlight the strings and comments of a file")]
    Classify {
        #[clap(help = "The file to classify, or stdin if omitted")]
        path: Option<PathBuf>,
        #[clap(short, long, help = "The language of the file")]
        lang: String,
    },
}

#[derive(clap::Args)]
struct LangOptions {
    #[clap(short, long, help = "The language to translate from")]
    from: String,
    #[clap(short, long, help = "The language to translate to")]
    to: String,
}

impl LangOptions {
    fn parse(&self) -> TranslateResult<(Lang, Lang)> {
        Ok((parse_lang(&self.from)?, parse_lang(&self.to)?))
    }
}

#[derive(clap::Args)]
struct ConfigOptions {
    #[clap(
        long = "config",
        default_value_t = ConfigSource::SearchFile,
        help = "Select the configuration source (one of search-file, default, or a path to a .translate.json file)"
    )]
    config_source: ConfigSource,
    #[clap(long, help = "Don't substitute primitives")]
    no_primitives: bool,
    #[clap(long, help = "Don't rewrite array literals")]
    no_literals: bool,
    #[clap(long, help = "Don't translate comment markers")]
    keep_comment_markers: bool,
}

impl ConfigOptions {
    fn config(&self, path: Option<&Path>) -> TranslateResult<TranslateConfig> {
        let mut config = TranslateConfig::from_source(self.config_source.clone(), path)?;
        if self.no_primitives {
            config = config.with_primitives(false);
        }
        if self.no_literals {
            config = config.with_array_literals(false);
        }
        if self.keep_comment_markers {
            config = config.with_comment_markers(false);
        }
        config.require_any()
    }
}

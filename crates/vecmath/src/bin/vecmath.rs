use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use anyhow::{Context, anyhow};
    use clap::{Parser, Subcommand};
    use std::{fmt, str::FromStr};
    use vecmath::{Double2, Double3, Double4, ParseVectorError, Swizzle, format::SEPARATOR};

    #[derive(Debug, Parser)]
    #[command(
        about = "Evaluate vector functions",
        long_about = "Evaluate vector functions. Vectors are given as 2 to 4 \
                      comma-separated components, e.g. \"1, 2.5, -3\"."
    )]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Compute the length of a vector
        Length {
            #[arg(allow_hyphen_values = true)]
            vector: AnyVector,
        },
        /// Compute the distance between two points
        Distance {
            #[arg(allow_hyphen_values = true)]
            a: AnyVector,
            #[arg(allow_hyphen_values = true)]
            b: AnyVector,
        },
        /// Compute the dot product of two vectors
        Dot {
            #[arg(allow_hyphen_values = true)]
            a: AnyVector,
            #[arg(allow_hyphen_values = true)]
            b: AnyVector,
        },
        /// Compute the cross product of two 3-component vectors
        Cross {
            #[arg(allow_hyphen_values = true)]
            a: Double3,
            #[arg(allow_hyphen_values = true)]
            b: Double3,
        },
        /// Scale a vector to unit length
        Normalize {
            #[arg(allow_hyphen_values = true)]
            vector: AnyVector,
        },
        /// Reflect an incident vector about a plane with the given normal
        Reflect {
            #[arg(allow_hyphen_values = true)]
            incident: AnyVector,
            #[arg(allow_hyphen_values = true)]
            normal: AnyVector,
        },
        /// Refract an incident vector through a surface with the given normal
        Refract {
            #[arg(allow_hyphen_values = true)]
            incident: AnyVector,
            #[arg(allow_hyphen_values = true)]
            normal: AnyVector,
            /// Ratio of refractive indices
            #[arg(allow_hyphen_values = true)]
            eta: f64,
        },
        /// Interpolate linearly between two vectors
        Lerp {
            #[arg(allow_hyphen_values = true)]
            start: AnyVector,
            #[arg(allow_hyphen_values = true)]
            end: AnyVector,
            #[arg(allow_hyphen_values = true)]
            t: f64,
        },
        /// Clamp each component of a vector to the given bounds
        Clamp {
            #[arg(allow_hyphen_values = true)]
            vector: AnyVector,
            #[arg(allow_hyphen_values = true)]
            min: f64,
            #[arg(allow_hyphen_values = true)]
            max: f64,
        },
        /// Select components of a vector with a swizzle pattern like `zyx`
        /// (use `_` for a zero component)
        Swizzle {
            #[arg(allow_hyphen_values = true)]
            vector: AnyVector,
            pattern: String,
        },
    }

    /// A vector of `f64`s with a number of components known only at runtime.
    #[derive(Clone, Copy, Debug)]
    enum AnyVector {
        Two(Double2),
        Three(Double3),
        Four(Double4),
    }

    impl FromStr for AnyVector {
        type Err = ParseVectorError;

        fn from_str(text: &str) -> Result<Self, Self::Err> {
            match text.split(SEPARATOR).count() {
                2 => text.parse().map(Self::Two),
                3 => text.parse().map(Self::Three),
                _ => text.parse().map(Self::Four),
            }
        }
    }

    impl fmt::Display for AnyVector {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::Two(v) => fmt::Display::fmt(v, f),
                Self::Three(v) => fmt::Display::fmt(v, f),
                Self::Four(v) => fmt::Display::fmt(v, f),
            }
        }
    }

    /// Evaluates the expression with `$v` bound to the vector, whatever its
    /// number of components, and formats the result.
    macro_rules! with_vector {
        ($vector:expr, |$v:ident| $body:expr) => {
            match $vector {
                AnyVector::Two($v) => $body.to_string(),
                AnyVector::Three($v) => $body.to_string(),
                AnyVector::Four($v) => $body.to_string(),
            }
        };
    }

    /// Like `with_vector`, but for two vectors that must have the same number
    /// of components.
    macro_rules! with_vectors {
        ($a:expr, $b:expr, |$x:ident, $y:ident| $body:expr) => {
            match ($a, $b) {
                (AnyVector::Two($x), AnyVector::Two($y)) => Ok($body.to_string()),
                (AnyVector::Three($x), AnyVector::Three($y)) => Ok($body.to_string()),
                (AnyVector::Four($x), AnyVector::Four($y)) => Ok($body.to_string()),
                (a, b) => Err(anyhow!(
                    "Vectors ({a}) and ({b}) have different numbers of components"
                )),
            }
        };
    }

    fn swizzled<const M: usize>(vector: AnyVector, pattern: &str) -> Result<String> {
        let swizzle = Swizzle::<M>::parse(pattern)?;
        let swizzled = match vector {
            AnyVector::Two(v) => swizzle.read(&v),
            AnyVector::Three(v) => swizzle.read(&v),
            AnyVector::Four(v) => swizzle.read(&v),
        }
        .with_context(|| format!("Could not apply swizzle `{pattern}` to ({vector})"))?;
        Ok(swizzled.to_string())
    }

    fn evaluate(command: Command) -> Result<String> {
        log::trace!("Evaluating {command:?}");
        match command {
            Command::Length { vector } => Ok(with_vector!(vector, |v| v.length())),
            Command::Distance { a, b } => with_vectors!(a, b, |a, b| a.distance(&b)),
            Command::Dot { a, b } => with_vectors!(a, b, |a, b| a.dot(&b)),
            Command::Cross { a, b } => Ok(a.cross(&b).to_string()),
            Command::Normalize { vector } => Ok(with_vector!(vector, |v| v.normalized())),
            Command::Reflect { incident, normal } => {
                with_vectors!(incident, normal, |i, n| i.reflect(&n))
            }
            Command::Refract {
                incident,
                normal,
                eta,
            } => with_vectors!(incident, normal, |i, n| i.refract(&n, eta)),
            Command::Lerp { start, end, t } => {
                with_vectors!(start, end, |a, b| a.lerp(&b, t))
            }
            Command::Clamp { vector, min, max } => Ok(with_vector!(vector, |v| v
                .component_clamp_scalar(min, max))),
            Command::Swizzle { vector, pattern } => match pattern.chars().count() {
                1 => swizzled::<1>(vector, &pattern),
                2 => swizzled::<2>(vector, &pattern),
                3 => swizzled::<3>(vector, &pattern),
                4 => swizzled::<4>(vector, &pattern),
                len => Err(anyhow!(
                    "Swizzle pattern `{pattern}` has {len} letters, expected 1 to 4"
                )),
            },
        }
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();
        let output = evaluate(cli.command)?;
        println!("{output}");
        Ok(())
    }

}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}

//! Navigation commands replayed by the headless driver.

use std::str::FromStr;

use thiserror::Error;

/// Zoom factor of the "zoom in" control; "zoom out" is its inverse.
pub const ZOOM_STEP: f64 = 0.5;
/// Fraction of the span moved by one pan step.
pub const PAN_STEP: f64 = 0.2;

/// One navigation step applied to a [`RenderSession`](crate::session::RenderSession).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// `zoom:<factor>`, or `in` / `out` for the standard steps.
    Zoom(f64),
    /// `pan:<fx>,<fy>`, or `left` / `right` / `up` / `down`.
    Pan(f64, f64),
    /// `center:<x>,<y>`
    Recenter(f64, f64),
    /// `click:<px>,<py>`
    Click(u32, u32),
    /// `iter:<n>`
    MaxIter(u32),
}

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("unknown command `{0}`")]
    Unknown(String),

    #[error("bad argument for `{command}`: `{arg}`")]
    BadArgument { command: String, arg: String },
}

fn pair<T: FromStr>(command: &str, arg: &str) -> Result<(T, T), CommandError> {
    let bad = || CommandError::BadArgument {
        command: command.to_string(),
        arg: arg.to_string(),
    };
    let (a, b) = arg.split_once(',').ok_or_else(bad)?;
    let a = a.trim().parse().map_err(|_| bad())?;
    let b = b.trim().parse().map_err(|_| bad())?;
    Ok((a, b))
}

fn single<T: FromStr>(command: &str, arg: &str) -> Result<T, CommandError> {
    arg.trim().parse().map_err(|_| CommandError::BadArgument {
        command: command.to_string(),
        arg: arg.to_string(),
    })
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in" => return Ok(Self::Zoom(ZOOM_STEP)),
            "out" => return Ok(Self::Zoom(1.0 / ZOOM_STEP)),
            "left" => return Ok(Self::Pan(-PAN_STEP, 0.0)),
            "right" => return Ok(Self::Pan(PAN_STEP, 0.0)),
            "up" => return Ok(Self::Pan(0.0, -PAN_STEP)),
            "down" => return Ok(Self::Pan(0.0, PAN_STEP)),
            _ => {}
        }
        let (name, arg) = s
            .split_once(':')
            .ok_or_else(|| CommandError::Unknown(s.to_string()))?;
        match name {
            "zoom" => Ok(Self::Zoom(single(name, arg)?)),
            "pan" => pair(name, arg).map(|(fx, fy)| Self::Pan(fx, fy)),
            "center" => pair(name, arg).map(|(x, y)| Self::Recenter(x, y)),
            "click" => pair(name, arg).map(|(px, py)| Self::Click(px, py)),
            "iter" => Ok(Self::MaxIter(single(name, arg)?)),
            _ => Err(CommandError::Unknown(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_named_steps() {
        assert_eq!("in".parse::<Command>(), Ok(Command::Zoom(0.5)));
        assert_eq!("out".parse::<Command>(), Ok(Command::Zoom(2.0)));
        assert_eq!("up".parse::<Command>(), Ok(Command::Pan(0.0, -0.2)));
        assert_eq!("right".parse::<Command>(), Ok(Command::Pan(0.2, 0.0)));
    }

    #[test]
    fn parses_arguments() {
        assert_eq!("zoom:0.25".parse::<Command>(), Ok(Command::Zoom(0.25)));
        assert_eq!("pan:0.1,-0.3".parse::<Command>(), Ok(Command::Pan(0.1, -0.3)));
        assert_eq!("center:-0.75, 0.1".parse::<Command>(), Ok(Command::Recenter(-0.75, 0.1)));
        assert_eq!("click:400,300".parse::<Command>(), Ok(Command::Click(400, 300)));
        assert_eq!("iter:1000".parse::<Command>(), Ok(Command::MaxIter(1000)));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            "spin".parse::<Command>(),
            Err(CommandError::Unknown(_))
        ));
        assert!(matches!(
            "click:-1,4".parse::<Command>(),
            Err(CommandError::BadArgument { .. })
        ));
        assert!(matches!(
            "pan:0.1".parse::<Command>(),
            Err(CommandError::BadArgument { .. })
        ));
        assert!("warp:1".parse::<Command>().is_err());
    }
}

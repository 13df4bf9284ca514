//! Parameter and mode descriptions for controller hosts
//!
//! Hosts use these to label knobs and to build controller templates.
//! [`write_template_csv`] emits the template directly into any
//! [`core::fmt::Write`] sink, so it works without an allocator.

use core::fmt::{self, Write};

use crate::{
    mode::{BackgroundMode, ForegroundMode},
    parameter::Parameter,
};

pub const ENGINE_NAME: &str = "Light Engine v1.0";
pub const ENGINE_VERSION: u32 = 1;

/// CSV header of the controller template
pub const TEMPLATE_CSV_HEADER: &str =
    "Parameter,CC,Minimum Value,Maximum Value,Layer,Tooltip,Choices";

/// Which layer a parameter affects
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Foreground,
    Background,
    /// Read by patterns of both layers
    Shared,
    /// Mode selectors belong to no layer
    Selector,
}

impl Layer {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Foreground => "Foreground",
            Self::Background => "Background",
            Self::Shared => "Shared",
            Self::Selector => "",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParameterInfo {
    pub parameter: Parameter,
    pub name: &'static str,
    pub layer: Layer,
    pub tooltip: &'static str,
}

const HUE_TOOLTIP: &str = "Sets color [roygbivmr]. Cyclic (min val = max val)";
const SATURATION_TOOLTIP: &str = "Sets saturation [white, chosen hue]";
const BRIGHTNESS_TOOLTIP: &str = "Sets intensity [LED off, LED on]";
const START_TOOLTIP: &str = "start position of line";
const LENGTH_TOOLTIP: &str = "length of line";
const SELECTOR_TOOLTIP: &str = "Layering of effects";

const fn info(
    parameter: Parameter,
    name: &'static str,
    layer: Layer,
    tooltip: &'static str,
) -> ParameterInfo {
    ParameterInfo {
        parameter,
        name,
        layer,
        tooltip,
    }
}

/// One entry per CC, in CC order
pub const PARAMETERS: [ParameterInfo; 15] = [
    info(Parameter::ForegroundHue, "Hue", Layer::Foreground, HUE_TOOLTIP),
    info(Parameter::ForegroundSaturation, "Saturation", Layer::Foreground, SATURATION_TOOLTIP),
    info(Parameter::ForegroundBrightness, "Brightness", Layer::Foreground, BRIGHTNESS_TOOLTIP),
    info(Parameter::ForegroundStart, "Start", Layer::Foreground, START_TOOLTIP),
    info(Parameter::ForegroundLength, "Length", Layer::Foreground, LENGTH_TOOLTIP),
    info(Parameter::ForegroundMode, "Foreground", Layer::Selector, SELECTOR_TOOLTIP),
    info(Parameter::LineCount, "Number of Lines", Layer::Foreground, "Number of lines"),
    info(
        Parameter::ColorAmplitude,
        "Color Amplitude",
        Layer::Shared,
        "color Amplitude for color sinusoid",
    ),
    info(Parameter::BackgroundMode, "Background", Layer::Selector, SELECTOR_TOOLTIP),
    info(Parameter::Pan, "Pan", Layer::Foreground, "Pan position for wave effects"),
    info(Parameter::BackgroundHue, "Hue", Layer::Background, HUE_TOOLTIP),
    info(Parameter::BackgroundSaturation, "Saturation", Layer::Background, SATURATION_TOOLTIP),
    info(Parameter::BackgroundBrightness, "Brightness", Layer::Background, BRIGHTNESS_TOOLTIP),
    info(Parameter::BackgroundStart, "Start", Layer::Background, START_TOOLTIP),
    info(Parameter::BackgroundLength, "Length", Layer::Background, LENGTH_TOOLTIP),
];

/// Description of the parameter on `cc`, if any
pub fn parameter_info(cc: u8) -> Option<&'static ParameterInfo> {
    PARAMETERS.iter().find(|info| info.parameter.cc() == cc)
}

impl Parameter {
    pub fn info(self) -> &'static ParameterInfo {
        &PARAMETERS[usize::from(self.cc() - 1)]
    }
}

/// Writes a CSV field, quoting it when it contains a separator, quote or newline
struct Field<'a>(&'a str);

impl fmt::Display for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.0.contains([',', '"', '\n']) {
            return f.write_str(self.0);
        }
        f.write_char('"')?;
        for (i, part) in self.0.split('"').enumerate() {
            if i > 0 {
                f.write_str("\"\"")?;
            }
            f.write_str(part)?;
        }
        f.write_char('"')
    }
}

/// Newline-joined names of the modes offered for `parameter`
///
/// Selectors list every mode they can pick. Other parameters list the
/// modes that read them, foreground modes first.
struct Choices(Parameter);

impl Choices {
    fn names(self) -> impl Iterator<Item = &'static str> {
        let parameter = self.0;
        let selector_fg = parameter == Parameter::ForegroundMode;
        let selector_bg = parameter == Parameter::BackgroundMode;
        let selector = selector_fg || selector_bg;

        let fg = ForegroundMode::ALL
            .into_iter()
            .filter(move |mode| selector_fg || (!selector && mode.uses().contains(&parameter)))
            .map(ForegroundMode::display_name);
        let bg = BackgroundMode::ALL
            .into_iter()
            .filter(move |mode| selector_bg || (!selector && mode.uses().contains(&parameter)))
            .map(BackgroundMode::display_name);
        fg.chain(bg)
    }
}

impl fmt::Display for Choices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Always quoted: the list is newline separated.
        f.write_char('"')?;
        for (i, name) in Self(self.0).names().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            f.write_str(name)?;
        }
        f.write_char('"')
    }
}

/// Write the controller template, one row per CC
///
/// # Errors
///
/// Propagates errors from the underlying writer.
pub fn write_template_csv<W: Write>(out: &mut W) -> fmt::Result {
    writeln!(out, "{TEMPLATE_CSV_HEADER}")?;
    for info in &PARAMETERS {
        writeln!(
            out,
            "{},{},0,{},{},{},{}",
            Field(info.name),
            info.parameter.cc(),
            crate::parameter::MAX_CC_VALUE,
            info.layer.as_str(),
            Field(info.tooltip),
            Choices(info.parameter),
        )?;
    }
    Ok(())
}

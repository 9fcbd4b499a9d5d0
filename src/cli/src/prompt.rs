use std::io::{self, BufRead, Write};

use beginner_solver::{Performer, Phase, Step, StepKind};
use cube_core::{
    ColorScheme, Cube, Face,
    scan::{Scan, parse_reading},
};
use owo_colors::OwoColorize;

/// Tells a human what to do and waits for them to do it
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompt { input, output }
    }

    fn read_line(&mut self) -> io::Result<String> {
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_owned())
    }

    fn ask(&mut self) -> io::Result<String> {
        write!(self.output, "  [enter] done, [s] skip, [q] quit > ")?;
        Ok(self.read_line()?.to_lowercase())
    }

    /// Ask for every face in scan order until each has a well formed reading. With a `scheme`,
    /// a reading whose center belongs on another face is asked for again.
    pub fn scan(&mut self, scheme: Option<&ColorScheme>) -> io::Result<Scan> {
        let mut scan = Scan::default();

        while let Some(face) = scan.next_missing() {
            write!(self.output, "{} face, nine letters row by row > ", face.bold())?;
            let line = self.read_line()?.to_uppercase();

            let reading = match parse_reading(face, &line) {
                Ok(reading) => reading,
                Err(err) => {
                    writeln!(self.output, "{}", err.red())?;
                    continue;
                }
            };

            if let Some(scheme) = scheme.filter(|scheme| !scheme.center_matches(face, &reading)) {
                let expected = scheme.color_of(face).name();
                writeln!(
                    self.output,
                    "{}",
                    format!("The {face} face should have a {expected} center").red()
                )?;
                continue;
            }

            scan.record(face, &reading);
        }

        Ok(scan)
    }
}

fn hint(kind: StepKind) -> Option<&'static str> {
    Some(match kind {
        StepKind::Search => "turn the working layer to look for a match",
        StepKind::ForcedAdvance => "keep turning the working layer",
        StepKind::LeftTrigger => "seat the corner from the left",
        StepKind::RightTrigger => "seat the corner from the right",
        StepKind::WhiteOnTop => "bring the corner around to face sideways",
        StepKind::StuckBottom => "pop the trapped corner out",
        StepKind::InsertLeft => "insert the edge to the left",
        StepKind::InsertRight => "insert the edge to the right",
        StepKind::EjectEdge => "knock the wrong edge out of the middle layer",
        StepKind::Align => "line up the top layer",
        StepKind::Turn
        | StepKind::Sledgehammer
        | StepKind::Sune
        | StepKind::Headlights
        | StepKind::EdgeCycle => return None,
    })
}

impl<R: BufRead, W: Write> Performer for Prompt<R, W> {
    type Error = io::Error;

    fn perform(&mut self, phase: Phase, step: &Step) -> io::Result<bool> {
        write!(self.output, "{}: {}", phase.bold(), step.moves.green())?;
        if step.to_string() != step.moves.to_string() {
            write!(self.output, " ({step})")?;
        }
        if let Some(hint) = hint(step.kind) {
            write!(self.output, ", {hint}")?;
        }
        writeln!(self.output)?;

        loop {
            match self.ask()?.as_str() {
                "" | "y" | "done" => return Ok(true),
                "s" | "skip" => return Ok(false),
                "q" | "quit" => {
                    return Err(io::Error::new(io::ErrorKind::Interrupted, "solve abandoned"));
                }
                _ => {}
            }
        }
    }

    fn start(&mut self, phase: Phase, held: &Cube) -> io::Result<()> {
        writeln!(
            self.output,
            "{} the cube with the {} center on top and the {} center facing you. \
             Every move names a face as you hold it now.",
            "Hold".bold(),
            held.center(Face::Up).name(),
            held.center(Face::Front).name(),
        )?;
        writeln!(self.output, "Starting with the {phase} phase.")
    }

    fn flip(&mut self, phase: Phase, held: &Cube) -> io::Result<()> {
        writeln!(
            self.output,
            "{} the cube over top to bottom for the {phase} phase, keeping the front face in front. \
             The {} center is now on top and the {} center faces you.",
            "Turn".bold(),
            held.center(Face::Up).name(),
            held.center(Face::Front).name(),
        )?;
        self.ask().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use cube_core::{Algorithm, ColorScheme};

    use super::*;

    fn step() -> Step {
        Step::new(StepKind::LeftTrigger, "F D F'".parse::<Algorithm>().unwrap())
    }

    #[test]
    fn answers_decide_what_happened() {
        let mut prompt = Prompt::new("\nwhat\ns\n".as_bytes(), Vec::new());

        assert!(prompt.perform(Phase::FirstLayerCorners, &step()).unwrap());
        assert!(!prompt.perform(Phase::FirstLayerCorners, &step()).unwrap());
        assert_eq!(
            prompt
                .perform(Phase::FirstLayerCorners, &step())
                .unwrap_err()
                .kind(),
            io::ErrorKind::UnexpectedEof
        );

        let output = String::from_utf8(prompt.output).unwrap();
        assert!(output.contains("Left Trigger"));
    }

    #[test]
    fn holding_instructions_name_the_centers() {
        let mut prompt = Prompt::new("\n".as_bytes(), Vec::new());
        let held = Cube::solved(&ColorScheme::default());

        prompt.start(Phase::Daisy, &held).unwrap();
        prompt.flip(Phase::YellowCross, &held.rotated_z2()).unwrap();

        let output = String::from_utf8(prompt.output).unwrap();
        let (start, flip) = output.split_once("Turn").unwrap();
        assert!(start.contains("white center on top"), "{start}");
        assert!(start.contains("green center facing you"), "{start}");
        assert!(flip.contains("yellow center is now on top"), "{flip}");
    }

    #[test]
    fn scanning_asks_again_until_a_face_reads_right() {
        let answers = "\
            gggggggg\n\
            ggg ggg ggg\n\
            rrrrrrrrr\n\
            bbbbbbbbb\n\
            ooooooooo\n\
            WWWWXWWWW\n\
            YYYYYYYYY\n\
            WWWWWWWWW\n\
            yyyyyyyyy\n";
        let mut prompt = Prompt::new(answers.as_bytes(), Vec::new());
        let scheme = ColorScheme::default();

        let scan = prompt.scan(Some(&scheme)).unwrap();
        assert_eq!(scan.to_cube().unwrap(), Cube::solved(&scheme));

        let output = String::from_utf8(prompt.output).unwrap();
        assert!(output.contains("expected 9"), "{output}");
        assert!(output.contains("should have a white center"), "{output}");
    }

    #[test]
    fn scanning_stops_when_input_ends() {
        let mut prompt = Prompt::new("GGGGGGGGG\n".as_bytes(), Vec::new());
        let err = prompt.scan(None).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn quitting_is_an_error() {
        let mut prompt = Prompt::new("q\n".as_bytes(), Vec::new());
        let err = prompt.perform(Phase::Cross, &step()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Interrupted);
    }
}

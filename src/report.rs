use crate::measurement::Sample;
use crate::ErrorBox;
use itertools::Itertools;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const HEADER: &str = "t,mx,my,x,y,vx,vy,fx,fy";

/// Tracker state after absorbing `sample`, plus the position predicted ahead of it.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Row {
    pub sample: Sample,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub fx: f64,
    pub fy: f64,
}

impl Row {
    fn fields(&self) -> [f64; 9] {
        [
            self.sample.t,
            self.sample.mx,
            self.sample.my,
            self.x,
            self.y,
            self.vx,
            self.vy,
            self.fx,
            self.fy,
        ]
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait Sink {
    fn record(&mut self, row: &Row) -> Result<(), ErrorBox>;
    fn finish(&mut self) -> Result<(), ErrorBox>;
}

pub struct Csv<W: Write> {
    writer: W,
}

impl Csv<BufWriter<File>> {
    pub fn create(path: &Path) -> Result<Self, ErrorBox> {
        let file = File::create(path)
            .map_err(|e| format!("Unable to create '{}': {e}", path.display()))?;
        Self::new(BufWriter::new(file))
    }
}

impl<W: Write> Csv<W> {
    pub fn new(mut writer: W) -> Result<Self, ErrorBox> {
        writeln!(writer, "{HEADER}")?;
        Ok(Self { writer })
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for Csv<W> {
    fn record(&mut self, row: &Row) -> Result<(), ErrorBox> {
        writeln!(self.writer, "{}", row.fields().iter().join(","))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ErrorBox> {
        Ok(self.writer.flush()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(t: f64) -> Row {
        Row {
            sample: Sample::new(t, 10.0, -0.5),
            x: 5.0,
            y: -0.25,
            vx: 1.0,
            vy: 0.125,
            fx: 10.0,
            fy: 0.375,
        }
    }

    #[test]
    fn test_empty_report_has_header_only() -> Result<(), ErrorBox> {
        let mut csv = Csv::new(Vec::new())?;
        csv.finish()?;

        assert_eq!("t,mx,my,x,y,vx,vy,fx,fy\n", String::from_utf8(csv.into_inner())?);

        Ok(())
    }

    #[test]
    fn test_rows_follow_header_in_order() -> Result<(), ErrorBox> {
        let mut csv = Csv::new(Vec::new())?;
        csv.record(&row(1.0))?;
        csv.record(&row(2.5))?;
        csv.finish()?;

        assert_eq!(
            "t,mx,my,x,y,vx,vy,fx,fy\n\
             1,10,-0.5,5,-0.25,1,0.125,10,0.375\n\
             2.5,10,-0.5,5,-0.25,1,0.125,10,0.375\n",
            String::from_utf8(csv.into_inner())?
        );

        Ok(())
    }

    #[test]
    fn test_values_keep_full_precision() -> Result<(), ErrorBox> {
        let mut csv = Csv::new(Vec::new())?;
        let mut r = row(0.1);
        r.vx = 2.4000000000000004;
        csv.record(&r)?;

        let output = String::from_utf8(csv.into_inner())?;

        assert_eq!(
            Some("0.1,10,-0.5,5,-0.25,2.4000000000000004,0.125,10,0.375"),
            output.lines().nth(1)
        );

        Ok(())
    }

    #[test]
    fn test_create_in_missing_directory_fails() {
        assert!(Csv::create(Path::new("/nonexistent/abtrack/out.csv")).is_err());
    }
}

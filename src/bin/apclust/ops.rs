use std::collections::BTreeMap;
use std::fmt::Debug;
use std::fs::File;
use std::io::{stdout, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;

use ndarray::{Array2, Axis};
use num_traits::Float;

#[derive(Debug)]
pub(crate) struct FileParseError {
    pub message: String,
}

/// Reads a delimited file of data rows.
///
/// Point data carries an id as its first column:
///     id1 val1 val2 val3
///     id2 val1 val2 val3
///
/// Precalculated input is an n x n distance matrix with no id column; rows
/// are labeled by position.
pub(crate) fn from_file<F>(
    p: PathBuf,
    delimiter: &str,
    is_precalculated: bool,
) -> Result<(Array2<F>, Vec<String>), FileParseError>
where
    F: Float + Default + FromStr,
    <F as FromStr>::Err: Debug,
{
    let reader = BufReader::new(File::open(p).map_err(|e| FileParseError {
        message: format!("Unable to open input file: {}", e),
    })?);
    let mut ids = Vec::new();
    let mut data = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| FileParseError {
            message: format!("Error reading line {}: {}", idx + 1, e),
        })?;
        if !line.contains(delimiter) {
            return Err(FileParseError {
                message: format!("Line {} is not properly delimited", idx + 1),
            });
        }
        let mut fields = line.split(delimiter);
        if is_precalculated {
            ids.push(idx.to_string());
        } else {
            match fields.next() {
                Some(id) => ids.push(id.to_string()),
                None => {
                    return Err(FileParseError {
                        message: format!("Missing row id at line {}", idx + 1),
                    })
                }
            }
        }
        let mut row: Vec<F> = Vec::new();
        for field in fields {
            match field.parse::<F>() {
                Ok(value) => row.push(value),
                Err(_) => {
                    return Err(FileParseError {
                        message: format!("Error parsing value at line {}", idx + 1),
                    })
                }
            }
        }
        data.push(row);
    }
    if data.is_empty() {
        return Err(FileParseError {
            message: "Input file is empty".to_string(),
        });
    }
    let (width, message) = if is_precalculated {
        (data.len(), "Precalculated input must be square")
    } else {
        (data[0].len(), "Input rows must all be the same length")
    };
    if data.iter().any(|row| row.len() != width) {
        return Err(FileParseError {
            message: message.to_string(),
        });
    }
    let mut out = Array2::<F>::default((data.len(), width));
    out.axis_iter_mut(Axis(0))
        .enumerate()
        .for_each(|(idx1, mut row)| {
            row.iter_mut().enumerate().for_each(|(idx2, value)| {
                *value = data[idx1][idx2];
            });
        });
    Ok((out, ids))
}

/// Group labels by exemplar and print one block per cluster.
pub(crate) fn display_results(labels: &[usize], ids: &[String]) {
    let mut clusters: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for (idx, &label) in labels.iter().enumerate() {
        clusters.entry(label).or_default().push(idx);
    }
    let mut writer = BufWriter::new(stdout());
    writer
        .write_all(
            format!("nClusters={} nSamples={}\n", clusters.len(), labels.len()).as_ref(),
        )
        .unwrap();
    clusters
        .iter()
        .enumerate()
        .for_each(|(idx, (exemplar, members))| {
            writer
                .write_all(
                    format!(
                        ">Cluster={} size={} exemplar={}\n",
                        idx + 1,
                        members.len(),
                        ids[*exemplar]
                    )
                    .as_ref(),
                )
                .unwrap();
            writer
                .write_all(
                    members
                        .iter()
                        .map(|&m| ids[m].as_str())
                        .collect::<Vec<&str>>()
                        .join(",")
                        .as_ref(),
                )
                .unwrap();
            writer.write_all(b"\n").unwrap();
        });
    writer.flush().unwrap();
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use ndarray::arr2;
    use tempfile::NamedTempFile;

    use crate::ops::from_file;

    #[test]
    fn valid_load() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "id1\t1.0\t5.0\t1.0").unwrap();
        writeln!(file, "id2\t2.0\t4.0\t2.0").unwrap();
        writeln!(file, "id3\t3.0\t3.0\t3.0").unwrap();
        let (data, ids) = from_file::<f32>(file.path().to_path_buf(), "\t", false).unwrap();
        assert_eq!(vec!["id1", "id2", "id3"], ids);
        let expected = arr2(&[[1., 5., 1.], [2., 4., 2.], [3., 3., 3.]]);
        assert_eq!(expected, data);
    }

    #[test]
    fn empty_file_is_rejected() {
        let file = NamedTempFile::new().unwrap();
        assert!(from_file::<f32>(file.path().to_path_buf(), "\t", false).is_err());
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "id1\t1.0\t5.0\t1.0").unwrap();
        writeln!(file, "id2\t2.0\t4.0").unwrap();
        assert!(from_file::<f32>(file.path().to_path_buf(), "\t", false).is_err());
    }

    #[test]
    fn unparseable_values_are_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "id1\t1.0\t5.0").unwrap();
        writeln!(file, "id2\ta\tb").unwrap();
        assert!(from_file::<f32>(file.path().to_path_buf(), "\t", false).is_err());
    }

    #[test]
    fn wrong_delimiter_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "id1 1.0 5.0").unwrap();
        assert!(from_file::<f32>(file.path().to_path_buf(), "\t", false).is_err());
    }

    #[test]
    fn precalculated_rows_labeled_by_position() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "0.0\t3.0\t12.0").unwrap();
        writeln!(file, "3.0\t0.0\t3.0").unwrap();
        writeln!(file, "12.0\t3.0\t0.0").unwrap();
        let (data, ids) = from_file::<f32>(file.path().to_path_buf(), "\t", true).unwrap();
        assert_eq!(vec!["0", "1", "2"], ids);
        assert_eq!((3, 3), data.dim());
    }

    #[test]
    fn non_square_precalculated_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "0.0\t3.0\t12.0").unwrap();
        writeln!(file, "3.0\t0.0\t3.0").unwrap();
        assert!(from_file::<f32>(file.path().to_path_buf(), "\t", true).is_err());
    }
}

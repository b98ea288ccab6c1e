use csv::Writer;
use serde::Serialize;
use std::path::Path;

use crate::table::CoefficientTable;

#[derive(Serialize)]
struct RowData {
    order: usize,
    index: usize,
    node: f64,
    weight: f64,
}

/// Writes the table as `order,index,node,weight` rows, one per node.
pub fn write_to_csv<P: AsRef<Path>>(table: &CoefficientTable, path: P) -> Result<(), csv::Error> {
    let mut wtr = Writer::from_path(path)?;
    for (order, pair) in table.iter().enumerate() {
        for index in 0..pair.len() {
            let row = RowData {
                order,
                index,
                node: pair.nodes[index],
                weight: pair.weights[index],
            };
            wtr.serialize(row)?;
        }
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coefs.csv");
        let table = CoefficientTable::compute(3, false).unwrap();

        write_to_csv(&table, &path).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<String> = rdr.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(headers, ["order", "index", "node", "weight"]);

        let rows: Vec<(usize, usize, f64, f64)> = rdr
            .deserialize()
            .collect::<Result<_, _>>()
            .unwrap();
        // 1 sentinel row + 1 + 2 + 3
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0], (0, 0, 0.0, 0.0));
        for &(order, index, node, weight) in &rows[1..] {
            assert_eq!(node, table[order].nodes[index]);
            assert_eq!(weight, table[order].weights[index]);
        }
        assert_eq!(rows[6].0, 3);
        assert_eq!(rows[6].1, 2);
    }
}

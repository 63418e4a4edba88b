//! Module for parsing and representing TSPLIB instances.
//!
//! The converter only needs a narrow view of an instance: its name, its keyword
//! metadata, the node indexes, and a weight function. That view is the
//! [`ProblemInstance`] trait; [`TsplibProblem`] implements it for files in the
//! TSPLIB 95 format.

use crate::distance::{coordinate_weight, EdgeWeightFormat, EdgeWeightType, WeightMatrix};
use crate::error::{CostError, InstanceError};
use crate::record::json_number;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Read-only view of a problem instance consumed by the conversion pipeline.
pub trait ProblemInstance {
    /// Value of the `NAME` keyword.
    fn name(&self) -> &str;

    /// Keyword/value pairs in the order they appear in the source, keys upper-case
    /// and underscore separated.
    fn metadata(&self) -> &[(String, Value)];

    /// Node indexes in ascending order. Contiguous, starting at 0 or 1.
    fn nodes(&self) -> Vec<usize>;

    /// Smallest node index, `None` when the instance has no nodes.
    fn first_node(&self) -> Option<usize> {
        self.nodes().first().copied()
    }

    fn dimension(&self) -> usize;

    fn edge_weight_type(&self) -> Option<EdgeWeightType>;

    /// Weight of the edge between nodes `i` and `j`.
    fn cost(&self, i: usize, j: usize) -> Result<f64, CostError>;
}

/// A TSPLIB instance as read from a `.tsp` file.
#[derive(Debug, Clone)]
pub struct TsplibProblem {
    pub name: String,
    pub dimension: usize,
    pub edge_weight_type: Option<EdgeWeightType>,
    pub edge_weight_format: Option<EdgeWeightFormat>,
    /// Node id -> coordinates
    pub node_coords: BTreeMap<usize, Vec<f64>>,
    pub display_data: BTreeMap<usize, Vec<f64>>,
    /// Explicit weights, 0-indexed, present when `EDGE_WEIGHT_SECTION` was read
    pub weights: Option<WeightMatrix>,
    metadata: Vec<(String, Value)>,
}

/// Section data accumulated until the next keyword line.
enum Section {
    Coords(BTreeMap<usize, Vec<f64>>),
    Demands(BTreeMap<usize, f64>),
    Depots(Vec<usize>),
    EdgeWeights(Vec<f64>),
    EdgePairs(Vec<[usize; 2]>),
    AdjList {
        lists: BTreeMap<usize, Vec<usize>>,
        current: Option<usize>,
    },
    Tours {
        tours: Vec<Vec<usize>>,
        current: Vec<usize>,
    },
}

struct Parser {
    metadata: Vec<(String, Value)>,
    name: String,
    dimension: Option<usize>,
    edge_weight_type: Option<EdgeWeightType>,
    edge_weight_format: Option<EdgeWeightFormat>,
    edge_data_format: Option<String>,
    node_coords: BTreeMap<usize, Vec<f64>>,
    display_data: BTreeMap<usize, Vec<f64>>,
    edge_weights: Option<Vec<f64>>,
    /// Open section keyword, its data, and whether its `-1` terminator was seen
    section: Option<(String, Section, bool)>,
}

fn parse_number(keyword: &str, token: &str) -> Result<f64, InstanceError> {
    token.parse().map_err(|_| InstanceError::InvalidValue {
        keyword: keyword.to_string(),
        value: token.to_string(),
    })
}

fn parse_id(keyword: &str, token: &str) -> Result<usize, InstanceError> {
    token.parse().map_err(|_| InstanceError::InvalidValue {
        keyword: keyword.to_string(),
        value: token.to_string(),
    })
}

/// A data line starts with a numeric literal; words such as `inf` or `nan` do not count.
fn is_data_line(line: &str) -> bool {
    match line.split_whitespace().next() {
        Some(token) => {
            token.starts_with(|c: char| c.is_ascii_digit() || matches!(c, '-' | '+' | '.'))
                && token.parse::<f64>().is_ok()
        }
        None => false,
    }
}

fn node_map<T>(entries: &BTreeMap<usize, T>, render: impl Fn(&T) -> Value) -> Value {
    let map: Map<String, Value> = entries
        .iter()
        .map(|(id, value)| (id.to_string(), render(value)))
        .collect();
    Value::Object(map)
}

fn coords_value(coords: &[f64]) -> Value {
    Value::Array(coords.iter().map(|&c| json_number(c)).collect())
}

fn ids_value(ids: &[usize]) -> Value {
    Value::Array(ids.iter().map(|&id| Value::from(id)).collect())
}

impl Parser {
    fn new() -> Self {
        Parser {
            metadata: Vec::new(),
            name: String::new(),
            dimension: None,
            edge_weight_type: None,
            edge_weight_format: None,
            edge_data_format: None,
            node_coords: BTreeMap::new(),
            display_data: BTreeMap::new(),
            edge_weights: None,
            section: None,
        }
    }

    /// Insert a field, replacing an earlier occurrence of the same keyword in place.
    fn set(&mut self, keyword: &str, value: Value) {
        match self.metadata.iter_mut().find(|(k, _)| k == keyword) {
            Some(entry) => entry.1 = value,
            None => self.metadata.push((keyword.to_string(), value)),
        }
    }

    fn keyword_line(&mut self, line: &str) -> Result<(), InstanceError> {
        self.close_section();

        let (keyword, value) = match line.split_once(':') {
            Some((k, v)) => (k.trim(), v.trim()),
            None => match line.split_once(char::is_whitespace) {
                Some((k, v)) => (k.trim(), v.trim()),
                None => (line.trim(), ""),
            },
        };
        let keyword = keyword.to_ascii_uppercase();

        if keyword.ends_with("_SECTION") {
            return self.open_section(keyword, value);
        }

        match keyword.as_str() {
            "NAME" => {
                self.name = value.to_string();
                self.set(&keyword, Value::from(value));
            }
            "COMMENT" => {
                let comment = match self.metadata.iter().find(|(k, _)| k == "COMMENT") {
                    Some((_, Value::String(previous))) => format!("{}\n{}", previous, value),
                    _ => value.to_string(),
                };
                self.set(&keyword, Value::from(comment));
            }
            "DIMENSION" | "CAPACITY" => {
                let n = parse_id(&keyword, value)?;
                if keyword == "DIMENSION" {
                    self.dimension = Some(n);
                }
                self.set(&keyword, Value::from(n));
            }
            "EDGE_WEIGHT_TYPE" => {
                let kind = EdgeWeightType::from_keyword(value).ok_or_else(|| {
                    InstanceError::InvalidValue {
                        keyword: keyword.clone(),
                        value: value.to_string(),
                    }
                })?;
                self.edge_weight_type = Some(kind);
                self.set(&keyword, Value::from(kind.as_str()));
            }
            "EDGE_WEIGHT_FORMAT" => {
                let format = EdgeWeightFormat::from_keyword(value).ok_or_else(|| {
                    InstanceError::InvalidValue {
                        keyword: keyword.clone(),
                        value: value.to_string(),
                    }
                })?;
                self.edge_weight_format = Some(format);
                self.set(&keyword, Value::from(format.as_str()));
            }
            "EDGE_DATA_FORMAT" => {
                self.edge_data_format = Some(value.to_ascii_uppercase());
                self.set(&keyword, Value::from(value));
            }
            _ => self.set(&keyword, Value::from(value)),
        }
        Ok(())
    }

    fn open_section(&mut self, keyword: String, inline: &str) -> Result<(), InstanceError> {
        let section = match keyword.as_str() {
            "NODE_COORD_SECTION" | "DISPLAY_DATA_SECTION" => Section::Coords(BTreeMap::new()),
            "DEMAND_SECTION" => Section::Demands(BTreeMap::new()),
            "DEPOT_SECTION" => Section::Depots(Vec::new()),
            "EDGE_WEIGHT_SECTION" => Section::EdgeWeights(Vec::new()),
            "FIXED_EDGES_SECTION" => Section::EdgePairs(Vec::new()),
            "EDGE_DATA_SECTION" => match self.edge_data_format.as_deref() {
                Some("ADJ_LIST") => Section::AdjList {
                    lists: BTreeMap::new(),
                    current: None,
                },
                _ => Section::EdgePairs(Vec::new()),
            },
            "TOUR_SECTION" => Section::Tours {
                tours: Vec::new(),
                current: Vec::new(),
            },
            _ => return Err(InstanceError::UnknownSection(keyword)),
        };
        self.section = Some((keyword, section, false));
        if !inline.is_empty() {
            self.data_line(0, inline)?;
        }
        Ok(())
    }

    fn data_line(&mut self, line_no: usize, line: &str) -> Result<(), InstanceError> {
        let Some((keyword, section, terminated)) = self.section.as_mut() else {
            return Err(InstanceError::MalformedSection {
                section: "specification".to_string(),
                line: line_no,
                content: line.to_string(),
            });
        };
        let keyword = keyword.as_str();
        let malformed = || InstanceError::MalformedSection {
            section: keyword.to_string(),
            line: line_no,
            content: line.to_string(),
        };
        let tokens: Vec<&str> = line.split_whitespace().collect();

        match section {
            Section::Coords(entries) => {
                if tokens.len() < 3 {
                    return Err(malformed());
                }
                let id = parse_id(keyword, tokens[0])?;
                let coords = tokens[1..]
                    .iter()
                    .map(|t| parse_number(keyword, t))
                    .collect::<Result<Vec<_>, _>>()?;
                entries.insert(id, coords);
            }
            Section::Demands(entries) => {
                if tokens.len() != 2 {
                    return Err(malformed());
                }
                let id = parse_id(keyword, tokens[0])?;
                entries.insert(id, parse_number(keyword, tokens[1])?);
            }
            Section::EdgeWeights(weights) => {
                for token in tokens {
                    weights.push(parse_number(keyword, token)?);
                }
            }
            Section::Depots(ids) => {
                for token in tokens {
                    if *terminated {
                        return Err(malformed());
                    }
                    if token == "-1" {
                        *terminated = true;
                    } else {
                        ids.push(parse_id(keyword, token)?);
                    }
                }
            }
            Section::EdgePairs(pairs) => {
                if *terminated {
                    return Err(malformed());
                }
                match tokens.as_slice() {
                    ["-1"] => *terminated = true,
                    [a, b] => pairs.push([parse_id(keyword, a)?, parse_id(keyword, b)?]),
                    _ => return Err(malformed()),
                }
            }
            Section::AdjList { lists, current } => {
                for token in tokens {
                    if *terminated {
                        return Err(malformed());
                    }
                    match (token, *current) {
                        ("-1", Some(_)) => *current = None,
                        ("-1", None) => *terminated = true,
                        (t, None) => {
                            let node = parse_id(keyword, t)?;
                            lists.entry(node).or_default();
                            *current = Some(node);
                        }
                        (t, Some(node)) => {
                            let neighbor = parse_id(keyword, t)?;
                            lists.entry(node).or_default().push(neighbor);
                        }
                    }
                }
            }
            Section::Tours { tours, current } => {
                for token in tokens {
                    if *terminated {
                        return Err(malformed());
                    }
                    if token == "-1" {
                        if current.is_empty() {
                            *terminated = true;
                        } else {
                            tours.push(std::mem::take(current));
                        }
                    } else {
                        current.push(parse_id(keyword, token)?);
                    }
                }
            }
        }
        Ok(())
    }

    /// Store the open section, if any, both typed and as a metadata field.
    fn close_section(&mut self) {
        let Some((keyword, section, _)) = self.section.take() else {
            return;
        };
        let value = match section {
            Section::Coords(entries) => {
                let value = node_map(&entries, |c| coords_value(c));
                if keyword == "NODE_COORD_SECTION" {
                    self.node_coords = entries;
                } else {
                    self.display_data = entries;
                }
                value
            }
            Section::Demands(entries) => node_map(&entries, |&d| json_number(d)),
            Section::Depots(ids) => ids_value(&ids),
            Section::EdgeWeights(weights) => {
                let value = Value::Array(weights.iter().map(|&w| json_number(w)).collect());
                self.edge_weights = Some(weights);
                value
            }
            Section::EdgePairs(pairs) => Value::Array(pairs.iter().map(|p| ids_value(p)).collect()),
            Section::AdjList { lists, .. } => node_map(&lists, |l| ids_value(l)),
            Section::Tours { mut tours, current } => {
                if !current.is_empty() {
                    tours.push(current);
                }
                Value::Array(tours.iter().map(|t| ids_value(t)).collect())
            }
        };
        self.set(&keyword, value);
    }

    fn finish(mut self) -> Result<TsplibProblem, InstanceError> {
        self.close_section();
        let dimension = self.dimension.ok_or(InstanceError::MissingField("DIMENSION"))?;

        for (section, entries) in [
            ("NODE_COORD_SECTION", &self.node_coords),
            ("DISPLAY_DATA_SECTION", &self.display_data),
        ] {
            if !entries.is_empty() && entries.len() != dimension {
                return Err(InstanceError::DimensionMismatch {
                    section,
                    dimension,
                    found: entries.len(),
                });
            }
        }

        let weights = match self.edge_weights {
            Some(weights) => {
                // FULL_MATRIX is the only sensible reading without a declared format
                let format = self
                    .edge_weight_format
                    .unwrap_or(EdgeWeightFormat::FullMatrix);
                if format != EdgeWeightFormat::Function
                    && format.weight_count(dimension) != Some(weights.len())
                {
                    return Err(InstanceError::DimensionMismatch {
                        section: "EDGE_WEIGHT_SECTION",
                        dimension,
                        found: weights.len(),
                    });
                }
                Some(WeightMatrix::new(format, dimension, weights))
            }
            None => None,
        };

        if self.edge_weight_type == Some(EdgeWeightType::Explicit)
            && weights.is_none()
            && self.edge_weight_format != Some(EdgeWeightFormat::Function)
        {
            return Err(InstanceError::MissingField("EDGE_WEIGHT_SECTION"));
        }

        Ok(TsplibProblem {
            name: self.name,
            dimension,
            edge_weight_type: self.edge_weight_type,
            edge_weight_format: self.edge_weight_format,
            node_coords: self.node_coords,
            display_data: self.display_data,
            weights,
            metadata: self.metadata,
        })
    }
}

impl TsplibProblem {
    /// Parse a TSPLIB instance from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, InstanceError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parse a TSPLIB instance from its textual content
    pub fn parse(text: &str) -> Result<Self, InstanceError> {
        let mut parser = Parser::new();

        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line == "EOF" {
                break;
            }
            if parser.section.is_some() && is_data_line(line) {
                parser.data_line(index + 1, line)?;
            } else if is_data_line(line) {
                return Err(InstanceError::MalformedSection {
                    section: "specification".to_string(),
                    line: index + 1,
                    content: line.to_string(),
                });
            } else {
                parser.keyword_line(line)?;
            }
        }

        parser.finish()
    }


    fn coords(&self, node: usize, arity: usize) -> Result<&[f64], CostError> {
        let coords = self
            .node_coords
            .get(&node)
            .ok_or(CostError::MissingCoordinates(node))?;
        if coords.len() < arity {
            return Err(CostError::CoordinateArity {
                node,
                expected: arity,
                found: coords.len(),
            });
        }
        Ok(coords)
    }
}

impl ProblemInstance for TsplibProblem {
    fn name(&self) -> &str {
        &self.name
    }

    fn metadata(&self) -> &[(String, Value)] {
        &self.metadata
    }

    fn nodes(&self) -> Vec<usize> {
        if !self.node_coords.is_empty() {
            self.node_coords.keys().copied().collect()
        } else if !self.display_data.is_empty() {
            self.display_data.keys().copied().collect()
        } else {
            (0..self.dimension).collect()
        }
    }

    fn first_node(&self) -> Option<usize> {
        self.node_coords
            .keys()
            .next()
            .or_else(|| self.display_data.keys().next())
            .copied()
            .or((self.dimension > 0).then_some(0))
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn edge_weight_type(&self) -> Option<EdgeWeightType> {
        self.edge_weight_type
    }

    fn cost(&self, i: usize, j: usize) -> Result<f64, CostError> {
        let kind = self.edge_weight_type.ok_or(CostError::MissingWeightType)?;
        if kind == EdgeWeightType::Explicit {
            let weights = self
                .weights
                .as_ref()
                .ok_or(CostError::UnsupportedWeightFormat(
                    self.edge_weight_format.map(|f| f.as_str().to_string()),
                ))?;
            let offset = self.first_node().unwrap_or(0);
            if i < offset || j < offset {
                return Err(CostError::MissingWeight(i, j));
            }
            return weights.get(i - offset, j - offset);
        }

        let arity = kind
            .coordinate_arity()
            .ok_or_else(|| CostError::UnsupportedWeightType(kind.to_string()))?;
        coordinate_weight(kind, self.coords(i, arity)?, self.coords(j, arity)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SQUARE: &str = "NAME : square4
COMMENT : Four corners
TYPE : TSP
DIMENSION : 4
EDGE_WEIGHT_TYPE : EUC_2D
NODE_COORD_SECTION
1 0 0
2 3 0
3 3 4
4 0 4
EOF
";

    const EXPLICIT: &str = "NAME: tri3
TYPE: TSP
DIMENSION: 3
EDGE_WEIGHT_TYPE: EXPLICIT
EDGE_WEIGHT_FORMAT: UPPER_ROW
EDGE_WEIGHT_SECTION
  7 9
  4
EOF
";

    #[test]
    fn test_parse_coordinates() {
        let problem = TsplibProblem::parse(SQUARE).unwrap();
        assert_eq!(problem.name(), "square4");
        assert_eq!(problem.dimension(), 4);
        assert_eq!(problem.edge_weight_type(), Some(EdgeWeightType::Euc2d));
        assert_eq!(problem.nodes(), vec![1, 2, 3, 4]);
        assert_eq!(problem.cost(1, 3).unwrap(), 5.0);
        assert_eq!(problem.cost(2, 4).unwrap(), 5.0);
        assert_eq!(problem.cost(1, 2).unwrap(), 3.0);
    }

    #[test]
    fn test_metadata_order_and_values() {
        let problem = TsplibProblem::parse(SQUARE).unwrap();
        let keys: Vec<&str> = problem.metadata().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            vec!["NAME", "COMMENT", "TYPE", "DIMENSION", "EDGE_WEIGHT_TYPE", "NODE_COORD_SECTION"]
        );
        let coords = &problem.metadata()[5].1;
        assert_eq!(coords["1"], json!([0, 0]));
        assert_eq!(coords["3"], json!([3, 4]));
        assert_eq!(problem.metadata()[3].1, json!(4));
    }

    #[test]
    fn test_explicit_nodes_start_at_zero() {
        let problem = TsplibProblem::parse(EXPLICIT).unwrap();
        assert_eq!(problem.nodes(), vec![0, 1, 2]);
        assert_eq!(problem.cost(0, 1).unwrap(), 7.0);
        assert_eq!(problem.cost(0, 2).unwrap(), 9.0);
        assert_eq!(problem.cost(2, 1).unwrap(), 4.0);
        assert_eq!(problem.cost(1, 1).unwrap(), 0.0);
    }

    #[test]
    fn test_explicit_with_display_data_is_offset() {
        let text = format!(
            "{}DISPLAY_DATA_SECTION\n1 0.5 0.5\n2 1.5 1.5\n3 2.5 2.5\nEOF\n",
            EXPLICIT.trim_end_matches("EOF\n")
        );
        let problem = TsplibProblem::parse(&text).unwrap();
        assert_eq!(problem.nodes(), vec![1, 2, 3]);
        assert_eq!(problem.cost(1, 2).unwrap(), 7.0);
        assert_eq!(problem.cost(2, 3).unwrap(), 4.0);
    }

    #[test]
    fn test_terminated_sections() {
        let text = "NAME: t
DIMENSION: 3
DEPOT_SECTION
 1
 -1
DEMAND_SECTION
1 0
2 5
3 7
FIXED_EDGES_SECTION
1 2
-1
TOUR_SECTION
1 2 3 -1
-1
EOF";
        let problem = TsplibProblem::parse(text).unwrap();
        let field = |key: &str| {
            problem
                .metadata()
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
                .unwrap()
        };
        assert_eq!(field("DEPOT_SECTION"), json!([1]));
        assert_eq!(field("DEMAND_SECTION"), json!({"1": 0, "2": 5, "3": 7}));
        assert_eq!(field("FIXED_EDGES_SECTION"), json!([[1, 2]]));
        assert_eq!(field("TOUR_SECTION"), json!([[1, 2, 3]]));
    }

    #[test]
    fn test_adjacency_list_edge_data() {
        let text = "NAME: g
DIMENSION: 3
EDGE_DATA_FORMAT: ADJ_LIST
EDGE_DATA_SECTION
1 2 3 -1
2 3 -1
-1
EOF";
        let problem = TsplibProblem::parse(text).unwrap();
        let (_, value) = problem.metadata().last().unwrap();
        assert_eq!(value, &json!({"1": [2, 3], "2": [3]}));
    }

    #[test]
    fn test_comments_are_joined() {
        let text = "NAME: c\nCOMMENT: first\nCOMMENT: second\nDIMENSION: 1\nEOF";
        let problem = TsplibProblem::parse(text).unwrap();
        assert_eq!(problem.metadata()[1].1, json!("first\nsecond"));
    }

    #[test]
    fn test_missing_dimension() {
        let err = TsplibProblem::parse("NAME: x\nEOF").unwrap_err();
        assert!(matches!(err, InstanceError::MissingField("DIMENSION")));
    }

    #[test]
    fn test_invalid_dimension() {
        let err = TsplibProblem::parse("NAME: x\nDIMENSION: many\nEOF").unwrap_err();
        assert!(matches!(err, InstanceError::InvalidValue { .. }));
    }

    #[test]
    fn test_malformed_coordinates() {
        let text = "NAME: x\nDIMENSION: 2\nEDGE_WEIGHT_TYPE: EUC_2D\nNODE_COORD_SECTION\n1 0\nEOF";
        let err = TsplibProblem::parse(text).unwrap_err();
        assert!(matches!(err, InstanceError::MalformedSection { line: 5, .. }));
    }

    #[test]
    fn test_unknown_section() {
        let err = TsplibProblem::parse("NAME: x\nFOO_SECTION\nEOF").unwrap_err();
        assert!(matches!(err, InstanceError::UnknownSection(s) if s == "FOO_SECTION"));
    }

    #[test]
    fn test_weight_count_must_fit_dimension() {
        let text = "NAME: huge
DIMENSION: 1000000000000000
EDGE_WEIGHT_TYPE: EXPLICIT
EDGE_WEIGHT_FORMAT: UPPER_ROW
EDGE_WEIGHT_SECTION
1 2 3
EOF";
        let err = TsplibProblem::parse(text).unwrap_err();
        assert!(matches!(
            err,
            InstanceError::DimensionMismatch {
                section: "EDGE_WEIGHT_SECTION",
                dimension: 1_000_000_000_000_000,
                found: 3,
            }
        ));

        let short = EXPLICIT.replace("  4\n", "");
        let err = TsplibProblem::parse(&short).unwrap_err();
        assert!(matches!(err, InstanceError::DimensionMismatch { found: 2, .. }));
    }

    #[test]
    fn test_coordinate_count_must_fit_dimension() {
        let text = SQUARE.replace("DIMENSION : 4", "DIMENSION : 5");
        let err = TsplibProblem::parse(&text).unwrap_err();
        assert!(matches!(
            err,
            InstanceError::DimensionMismatch {
                section: "NODE_COORD_SECTION",
                dimension: 5,
                found: 4,
            }
        ));
    }

    #[test]
    fn test_explicit_requires_weights() {
        let text = "NAME: x\nDIMENSION: 3\nEDGE_WEIGHT_TYPE: EXPLICIT\nEOF";
        let err = TsplibProblem::parse(text).unwrap_err();
        assert!(matches!(err, InstanceError::MissingField("EDGE_WEIGHT_SECTION")));
    }

    #[test]
    fn test_is_data_line() {
        assert!(is_data_line("1 0 0"));
        assert!(is_data_line("-1"));
        assert!(is_data_line("1.5 2"));
        assert!(is_data_line(".5 2"));
        assert!(!is_data_line("inf : 3"));
        assert!(!is_data_line("NaN"));
        assert!(!is_data_line("Infinity 2"));
        assert!(!is_data_line("NAME: x"));
        assert!(!is_data_line(""));
    }

    #[test]
    fn test_numeric_looking_keyword_closes_section() {
        let text = format!("{}INF : yes\nEOF\n", SQUARE.trim_end_matches("EOF\n"));
        let problem = TsplibProblem::parse(&text).unwrap();
        assert_eq!(problem.nodes(), vec![1, 2, 3, 4]);
        let (key, value) = problem.metadata().last().unwrap();
        assert_eq!(key, "INF");
        assert_eq!(value, &json!("yes"));
    }

    #[test]
    fn test_cost_errors() {
        let text = "NAME: x\nDIMENSION: 2\nNODE_COORD_SECTION\n1 0 0\n2 1 1\nEOF";
        let problem = TsplibProblem::parse(text).unwrap();
        assert_eq!(problem.cost(1, 2), Err(CostError::MissingWeightType));

        let problem = TsplibProblem::parse(SQUARE).unwrap();
        assert_eq!(problem.cost(1, 9), Err(CostError::MissingCoordinates(9)));
    }
}

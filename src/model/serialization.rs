// License: MIT
// Copyright © 2026 The cim-production Authors

//! Methods for rendering the entities of a [`Model`] as RDF/XML.

use crate::rdf::RdfWriter;
use crate::{Entity, Error, Id, Model};

/// Options for rendering entities as RDF/XML.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Whether to wrap the output in an XML declaration and an `rdf:RDF`
    /// envelope.
    pub header: bool,

    /// The number of spaces to indent by, per nesting level.  Only used when
    /// `pretty` is set.
    pub depth: usize,

    /// Whether to put every element on its own line.
    pub pretty: bool,
}

impl SerializeOptions {
    /// Options for a standalone, indented document: header, depth 2, pretty.
    pub fn document() -> Self {
        Self {
            header: true,
            depth: 2,
            pretty: true,
        }
    }
}

/// RDF/XML serialization.
impl Model {
    /// Renders a single entity, with its scalar attributes and one
    /// `rdf:resource` reference per related entity.
    pub fn serialize<T: Entity>(&self, id: Id<T>, options: SerializeOptions) -> Result<String, Error> {
        self.check_class(id.index(), T::CLASS)?;
        let record = self.live_record(id.index())?;

        let mut writer = RdfWriter::new(self, options.pretty, options.depth);
        if options.header {
            writer.open_document();
        }
        writer.entity(id.index(), record);
        if options.header {
            writer.close_document();
        }
        Ok(writer.finish())
    }

    /// Renders every entity of the model, in insertion order.  With
    /// `options.header` set, all of them are wrapped in a single envelope.
    pub fn serialize_all(&self, options: SerializeOptions) -> Result<String, Error> {
        let mut writer = RdfWriter::new(self, options.pretty, options.depth);
        if options.header {
            writer.open_document();
        }
        for index in self.graph.node_indices() {
            if let Some(record) = self.record(index) {
                writer.entity(index, record);
            }
        }
        if options.header {
            writer.close_document();
        }
        Ok(writer.finish())
    }

    /// Renders a single entity as a standalone document, with
    /// [`SerializeOptions::document`].
    pub fn to_rdf_string<T: Entity>(&self, id: Id<T>) -> Result<String, Error> {
        self.serialize(id, SerializeOptions::document())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        GenUnitOpCostCurve, GeneratingUnit, GrossToNetActivePowerCurve, Reservoir,
        ThermalGeneratingUnit,
    };
    use crate::ModelConfig;

    fn curve_lines(indent: &str) -> Vec<String> {
        [
            "<cimProduction:Element.uuid></cimProduction:Element.uuid>",
            "<cimProduction:IdentifiedObject.m_rid></cimProduction:IdentifiedObject.m_rid>",
            "<cimProduction:IdentifiedObject.local_name></cimProduction:IdentifiedObject.local_name>",
            "<cimProduction:IdentifiedObject.path_name></cimProduction:IdentifiedObject.path_name>",
            "<cimProduction:IdentifiedObject.description></cimProduction:IdentifiedObject.description>",
            "<cimProduction:IdentifiedObject.alias_name></cimProduction:IdentifiedObject.alias_name>",
            "<cimProduction:IdentifiedObject.name>Net &amp; &quot;gross&quot;</cimProduction:IdentifiedObject.name>",
            "<cimProduction:Curve.y2_unit></cimProduction:Curve.y2_unit>",
            "<cimProduction:Curve.y1_multiplier></cimProduction:Curve.y1_multiplier>",
            "<cimProduction:Curve.curve_style>constant_y_value</cimProduction:Curve.curve_style>",
            "<cimProduction:Curve.y2_multiplier></cimProduction:Curve.y2_multiplier>",
            "<cimProduction:Curve.x_unit>MW</cimProduction:Curve.x_unit>",
            "<cimProduction:Curve.y1_unit></cimProduction:Curve.y1_unit>",
            "<cimProduction:Curve.x_multiplier></cimProduction:Curve.x_multiplier>",
        ]
        .iter()
        .map(|line| format!("{indent}{line}"))
        .collect()
    }

    fn gross_to_net_model() -> Result<(Model, Id<GrossToNetActivePowerCurve>), Error> {
        let mut model = Model::default();
        let unit = model.insert(GeneratingUnit::with_uri("gu"))?;
        let curve = model.insert(GrossToNetActivePowerCurve::with_uri("g<1>"))?;
        model.update(curve, |entity| {
            entity.curve.identified_object.name = String::from("Net & \"gross\"");
            entity.curve.x_unit = String::from("MW");
        })?;
        model.set_single(GrossToNetActivePowerCurve::GENERATING_UNIT, curve, Some(unit))?;
        Ok((model, curve))
    }

    #[test]
    fn test_serialize_entity() -> Result<(), Error> {
        let (model, curve) = gross_to_net_model()?;

        let options = SerializeOptions {
            header: false,
            depth: 2,
            pretty: true,
        };
        let mut expected = vec![
            String::from("<cimProduction:GrossToNetActivePowerCurve rdf:ID=\"g&lt;1&gt;\">"),
            String::from(
                "  <cimProduction:GrossToNetActivePowerCurve.generating_unit rdf:resource=\"#gu\"/>",
            ),
        ];
        expected.extend(curve_lines("  "));
        expected.push(String::from("</cimProduction:GrossToNetActivePowerCurve>"));
        assert_eq!(model.serialize(curve, options)?, expected.join("\n"));

        // no whitespace between elements.
        let mut expected = vec![
            String::from("<cimProduction:GrossToNetActivePowerCurve rdf:ID=\"g&lt;1&gt;\">"),
            String::from(
                "<cimProduction:GrossToNetActivePowerCurve.generating_unit rdf:resource=\"#gu\"/>",
            ),
        ];
        expected.extend(curve_lines(""));
        expected.push(String::from("</cimProduction:GrossToNetActivePowerCurve>"));
        assert_eq!(
            model.serialize(curve, SerializeOptions::default())?,
            expected.concat()
        );

        Ok(())
    }

    #[test]
    fn test_serialize_document() -> Result<(), Error> {
        let (model, curve) = gross_to_net_model()?;

        let mut expected = vec![
            String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"),
            String::from(
                "<rdf:RDF xmlns:rdf=\"http://www.w3.org/1999/02/22-rdf-syntax-ns#\" \
                 xmlns:cimProduction=\"http://iec.ch/TC57/CIM-generic#Production\">",
            ),
            String::from("  <cimProduction:GrossToNetActivePowerCurve rdf:ID=\"g&lt;1&gt;\">"),
            String::from(
                "    <cimProduction:GrossToNetActivePowerCurve.generating_unit rdf:resource=\"#gu\"/>",
            ),
        ];
        expected.extend(curve_lines("    "));
        expected.push(String::from("  </cimProduction:GrossToNetActivePowerCurve>"));
        expected.push(String::from("</rdf:RDF>"));

        assert_eq!(model.to_rdf_string(curve)?, expected.join("\n"));
        assert_eq!(
            model.serialize(curve, SerializeOptions::document())?,
            model.to_rdf_string(curve)?
        );

        Ok(())
    }

    #[test]
    fn test_generating_unit_references() -> Result<(), Error> {
        let mut model = Model::new(ModelConfig {
            ns_prefix: String::from("prod"),
            ns_uri: String::from("urn:test#Production"),
            ..Default::default()
        });
        let thermal = model.insert(ThermalGeneratingUnit {
            unit: GeneratingUnit {
                nominal_p: 250.0,
                fast_start_flag: true,
                ..GeneratingUnit::with_uri("tgu")
            },
            ..Default::default()
        })?;
        assert_eq!(model.find::<ThermalGeneratingUnit>("tgu")?, thermal);
        let curves = [
            model.insert(GenUnitOpCostCurve::with_uri("c1"))?,
            model.insert(GenUnitOpCostCurve::with_uri("c2"))?,
        ];
        model.set_collection(GeneratingUnit::GEN_UNIT_OP_COST_CURVES, thermal, curves)?;

        let output = model.to_rdf_string(thermal)?;
        assert!(output.starts_with(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <rdf:RDF xmlns:rdf=\"http://www.w3.org/1999/02/22-rdf-syntax-ns#\" \
             xmlns:prod=\"urn:test#Production\">\n  <prod:ThermalGeneratingUnit rdf:ID=\"tgu\">"
        ));
        assert!(output.ends_with("\n  </prod:ThermalGeneratingUnit>\n</rdf:RDF>"));
        assert_eq!(output.matches("<rdf:RDF").count(), 1);
        assert_eq!(output.matches("<?xml").count(), 1);

        let reference_1 =
            "<prod:GeneratingUnit.gen_unit_op_cost_curves rdf:resource=\"#c1\"/>";
        let reference_2 =
            "<prod:GeneratingUnit.gen_unit_op_cost_curves rdf:resource=\"#c2\"/>";
        assert_eq!(output.matches(reference_1).count(), 1);
        assert_eq!(output.matches(reference_2).count(), 1);
        assert!(output.find(reference_1) < output.find(reference_2));

        assert!(output.contains("<prod:GeneratingUnit.nominal_p>250.0</prod:GeneratingUnit.nominal_p>"));
        assert!(output.contains(
            "<prod:GeneratingUnit.fast_start_flag>true</prod:GeneratingUnit.fast_start_flag>"
        ));
        // own fields come before inherited ones.
        let own = output.find("<prod:ThermalGeneratingUnit.o_mcost>");
        let inherited = output.find("<prod:GeneratingUnit.nominal_p>");
        assert!(own.is_some() && own < inherited);

        let curve = model.to_rdf_string(curves[0])?;
        assert!(curve.contains("<prod:GenUnitOpCostCurve.generating_unit rdf:resource=\"#tgu\"/>"));

        Ok(())
    }

    #[test]
    fn test_serialize_all() -> Result<(), Error> {
        let mut model = Model::default();
        let first = model.insert(Reservoir::with_uri("r1"))?;
        let second = model.insert(Reservoir::with_uri("r2"))?;
        let removed = model.insert(Reservoir::with_uri("r3"))?;
        model.add(Reservoir::SPILLS_INTO, first, [second])?;
        model.remove_entity(removed)?;

        let output = model.serialize_all(SerializeOptions::document())?;
        assert_eq!(output.matches("<rdf:RDF").count(), 1);
        assert_eq!(output.matches("<cimProduction:Reservoir rdf:ID=").count(), 2);
        assert!(!output.contains("r3"));
        assert!(output.find("rdf:ID=\"r1\"") < output.find("rdf:ID=\"r2\""));

        let single = model.serialize(first, SerializeOptions::default())?;
        assert!(model
            .serialize_all(SerializeOptions::default())?
            .starts_with(&single));

        assert_eq!(
            Model::default().serialize_all(SerializeOptions::default())?,
            ""
        );
        assert_eq!(
            model.serialize(removed, SerializeOptions::default()),
            Err(Error::entity_not_found(format!(
                "Entity with index {} not found.",
                removed.index().index()
            )))
        );

        Ok(())
    }
}

//! The XML handler contract: one method per grammar production.

pub trait XmlHandler {
    type Element;
    type Elements;
    type Attribute;
    type Attributes;

    fn element(
        &self,
        name: String,
        attributes: Option<Self::Attributes>,
        children: Option<Self::Elements>,
    ) -> Self::Element;
    fn some_elements(&self, head: Self::Element, tail: Option<Self::Elements>) -> Self::Elements;
    fn text(&self, content: String) -> Self::Element;
    fn comment(&self, content: String) -> Self::Element;
    fn attribute(&self, name: String, value: String) -> Self::Attribute;
    fn some_attributes(
        &self,
        head: Self::Attribute,
        tail: Option<Self::Attributes>,
    ) -> Self::Attributes;
}

// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::Layer;

/// The outcome of a successful compilation: the set of surviving states at
/// each depth of the diagram. The layer at depth `d` (with `1 <= d <= n`)
/// comprises the states reached after deciding the first `d` variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagram<T> {
    pub(crate) layers: Vec<Layer<T>>,
}

impl <T> Diagram<T> {
    /// The number of layers in the diagram (one per variable)
    pub fn nb_layers(&self) -> usize {
        self.layers.len()
    }
    /// Returns the layer at the given depth. The first layer sits at depth 1
    /// and the last one at depth `nb_layers()`. There is no layer at depth 0
    /// (that depth is the one of the initial state).
    pub fn layer(&self, depth: usize) -> Option<&Layer<T>> {
        depth.checked_sub(1).and_then(|i| self.layers.get(i))
    }
    /// Returns the deepest layer of the diagram
    pub fn last_layer(&self) -> Option<&Layer<T>> {
        self.layers.last()
    }
    /// All the layers, from the shallowest to the deepest one
    pub fn layers(&self) -> &[Layer<T>] {
        &self.layers
    }
    /// The number of states in each layer, from the shallowest to the deepest
    pub fn widths(&self) -> Vec<usize> {
        self.layers.iter().map(|l| l.len()).collect()
    }
    /// Consumes the diagram and returns its layers
    pub fn into_layers(self) -> Vec<Layer<T>> {
        self.layers
    }
}

#[cfg(test)]
mod tests {
    use crate::{Diagram, Layer};

    fn diagram() -> Diagram<usize> {
        Diagram {
            layers: vec![
                vec![1].into_iter().collect(),
                vec![2, 3].into_iter().collect(),
                vec![4, 5, 6].into_iter().collect(),
            ]
        }
    }

    #[test]
    fn layers_are_numbered_from_one() {
        let dd = diagram();
        assert_eq!(3, dd.nb_layers());
        assert!(dd.layer(0).is_none());
        assert_eq!(Some(&1), dd.layer(1).and_then(|l| l.get(0)));
        assert_eq!(Some(&4), dd.layer(3).and_then(|l| l.get(0)));
        assert!(dd.layer(4).is_none());
    }
    #[test]
    fn last_layer_is_the_deepest() {
        let dd = diagram();
        let expected: Layer<usize> = vec![4, 5, 6].into_iter().collect();
        assert_eq!(Some(&expected), dd.last_layer());
    }
    #[test]
    fn widths_follow_the_depth() {
        assert_eq!(vec![1, 2, 3], diagram().widths());
    }
    #[test]
    fn into_layers_gives_the_layers_back() {
        let layers = diagram().into_layers();
        assert_eq!(3, layers.len());
        assert_eq!(2, layers[1].len());
    }
}
